//! Balance ledger repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::Pagination;
use crate::model::{BalanceTransaction, NewBalanceTransaction};
use crate::types::filtering::TransactionFilter;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for the append-only balance ledger.
pub trait BalanceTransactionRepository {
    /// Appends a new ledger entry.
    fn create_balance_transaction(
        &mut self,
        new_transaction: NewBalanceTransaction,
    ) -> impl Future<Output = PgResult<BalanceTransaction>> + Send;

    /// Lists ledger entries matching the filter, newest first.
    fn list_balance_transactions(
        &mut self,
        filter: TransactionFilter,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<BalanceTransaction>>> + Send;
}

impl BalanceTransactionRepository for PgConnection {
    async fn create_balance_transaction(
        &mut self,
        new_transaction: NewBalanceTransaction,
    ) -> PgResult<BalanceTransaction> {
        use schema::balance_transactions;

        diesel::insert_into(balance_transactions::table)
            .values(&new_transaction)
            .returning(BalanceTransaction::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_balance_transactions(
        &mut self,
        filter: TransactionFilter,
        pagination: Pagination,
    ) -> PgResult<Vec<BalanceTransaction>> {
        use schema::balance_transactions::{self, dsl};

        let mut query = balance_transactions::table.into_boxed();

        if let Some(account_id) = filter.account_id {
            query = query.filter(dsl::account_id.eq(account_id));
        }
        if let Some(from) = filter.from {
            query = query.filter(dsl::created_at.ge(jiff_diesel::Timestamp::from(from)));
        }
        if let Some(until) = filter.until {
            query = query.filter(dsl::created_at.lt(jiff_diesel::Timestamp::from(until)));
        }

        query
            .order(dsl::created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(BalanceTransaction::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }
}
