//! Balance request repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::Pagination;
use crate::model::{BalanceRequest, NewBalanceRequest, SettleBalanceRequest};
use crate::types::{BalanceRequestStatus, filtering::BalanceRequestFilter};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for balance request database operations.
pub trait BalanceRequestRepository {
    /// Creates a new balance request.
    fn create_balance_request(
        &mut self,
        new_request: NewBalanceRequest,
    ) -> impl Future<Output = PgResult<BalanceRequest>> + Send;

    /// Finds a balance request by its unique identifier.
    fn find_balance_request_by_id(
        &mut self,
        request_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<BalanceRequest>>> + Send;

    /// Lists balance requests matching the filter, newest first.
    fn list_balance_requests(
        &mut self,
        filter: BalanceRequestFilter,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<BalanceRequest>>> + Send;

    /// Counts balance requests awaiting review.
    fn count_pending_balance_requests(&mut self) -> impl Future<Output = PgResult<i64>> + Send;

    /// Attaches an uploaded receipt to a pending request.
    ///
    /// Returns `None` when the request is no longer pending.
    fn attach_receipt(
        &mut self,
        request_id: Uuid,
        receipt_path: String,
    ) -> impl Future<Output = PgResult<Option<BalanceRequest>>> + Send;

    /// Settles a pending balance request exactly once.
    ///
    /// The update is guarded on `current_status = 'pending'`, so a request
    /// that has already been approved or rejected is left untouched and
    /// `None` is returned. Approval must run inside a transaction together
    /// with the balance credit and the ledger insert.
    fn settle_balance_request(
        &mut self,
        request_id: Uuid,
        settle: SettleBalanceRequest,
    ) -> impl Future<Output = PgResult<Option<BalanceRequest>>> + Send;
}

impl BalanceRequestRepository for PgConnection {
    async fn create_balance_request(
        &mut self,
        new_request: NewBalanceRequest,
    ) -> PgResult<BalanceRequest> {
        use schema::balance_requests;

        diesel::insert_into(balance_requests::table)
            .values(&new_request)
            .returning(BalanceRequest::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_balance_request_by_id(
        &mut self,
        request_id: Uuid,
    ) -> PgResult<Option<BalanceRequest>> {
        use schema::balance_requests::{self, dsl};

        balance_requests::table
            .filter(dsl::id.eq(request_id))
            .select(BalanceRequest::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_balance_requests(
        &mut self,
        filter: BalanceRequestFilter,
        pagination: Pagination,
    ) -> PgResult<Vec<BalanceRequest>> {
        use schema::balance_requests::{self, dsl};

        let mut query = balance_requests::table.into_boxed();

        if let Some(dealer_id) = filter.dealer_id {
            query = query.filter(dsl::dealer_id.eq(dealer_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(dsl::current_status.eq(status));
        }

        query
            .order(dsl::created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(BalanceRequest::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn count_pending_balance_requests(&mut self) -> PgResult<i64> {
        use schema::balance_requests::{self, dsl};

        balance_requests::table
            .filter(dsl::current_status.eq(BalanceRequestStatus::Pending))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn attach_receipt(
        &mut self,
        request_id: Uuid,
        receipt_path: String,
    ) -> PgResult<Option<BalanceRequest>> {
        use schema::balance_requests::{self, dsl};

        let now = jiff_diesel::Timestamp::from(jiff::Timestamp::now());

        diesel::update(
            balance_requests::table
                .filter(dsl::id.eq(request_id))
                .filter(dsl::current_status.eq(BalanceRequestStatus::Pending)),
        )
        .set((dsl::receipt_path.eq(Some(receipt_path)), dsl::updated_at.eq(now)))
        .returning(BalanceRequest::as_returning())
        .get_result(self)
        .await
        .optional()
        .map_err(PgError::from)
    }

    async fn settle_balance_request(
        &mut self,
        request_id: Uuid,
        settle: SettleBalanceRequest,
    ) -> PgResult<Option<BalanceRequest>> {
        use schema::balance_requests::{self, dsl};

        let now = jiff_diesel::Timestamp::from(jiff::Timestamp::now());

        diesel::update(
            balance_requests::table
                .filter(dsl::id.eq(request_id))
                .filter(dsl::current_status.eq(BalanceRequestStatus::Pending)),
        )
        .set((&settle, dsl::updated_at.eq(now)))
        .returning(BalanceRequest::as_returning())
        .get_result(self)
        .await
        .optional()
        .map_err(PgError::from)
    }
}
