//! Account notification repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use jiff::Timestamp;
use uuid::Uuid;

use super::Pagination;
use crate::model::{AccountNotification, NewAccountNotification};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for account notification database operations.
///
/// Handles notification creation, read-status management, and cleanup.
pub trait AccountNotificationRepository {
    /// Creates a new notification for an account.
    fn create_notification(
        &mut self,
        new_notification: NewAccountNotification,
    ) -> impl Future<Output = PgResult<AccountNotification>> + Send;

    /// Lists notifications for an account, newest first.
    fn list_notifications(
        &mut self,
        account_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<AccountNotification>>> + Send;

    /// Counts unread notifications for an account.
    fn count_unread_notifications(
        &mut self,
        account_id: Uuid,
    ) -> impl Future<Output = PgResult<i64>> + Send;

    /// Marks all unread notifications as read for an account.
    ///
    /// Returns the count of notifications marked as read.
    fn mark_all_notifications_read(
        &mut self,
        account_id: Uuid,
    ) -> impl Future<Output = PgResult<usize>> + Send;

    /// Permanently deletes a notification owned by the account.
    fn delete_notification(
        &mut self,
        account_id: Uuid,
        notification_id: Uuid,
    ) -> impl Future<Output = PgResult<bool>> + Send;
}

impl AccountNotificationRepository for PgConnection {
    async fn create_notification(
        &mut self,
        new_notification: NewAccountNotification,
    ) -> PgResult<AccountNotification> {
        use schema::account_notifications;

        diesel::insert_into(account_notifications::table)
            .values(&new_notification)
            .returning(AccountNotification::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_notifications(
        &mut self,
        account_id: Uuid,
        pagination: Pagination,
    ) -> PgResult<Vec<AccountNotification>> {
        use schema::account_notifications::{self, dsl};

        account_notifications::table
            .filter(dsl::account_id.eq(account_id))
            .order(dsl::created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(AccountNotification::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn count_unread_notifications(&mut self, account_id: Uuid) -> PgResult<i64> {
        use schema::account_notifications::{self, dsl};

        account_notifications::table
            .filter(dsl::account_id.eq(account_id))
            .filter(dsl::is_read.eq(false))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn mark_all_notifications_read(&mut self, account_id: Uuid) -> PgResult<usize> {
        use schema::account_notifications::{self, dsl};

        let now = jiff_diesel::Timestamp::from(Timestamp::now());

        diesel::update(
            account_notifications::table
                .filter(dsl::account_id.eq(account_id))
                .filter(dsl::is_read.eq(false)),
        )
        .set((dsl::is_read.eq(true), dsl::read_at.eq(Some(now))))
        .execute(self)
        .await
        .map_err(PgError::from)
    }

    async fn delete_notification(
        &mut self,
        account_id: Uuid,
        notification_id: Uuid,
    ) -> PgResult<bool> {
        use schema::account_notifications::{self, dsl};

        let deleted = diesel::delete(
            account_notifications::table
                .filter(dsl::id.eq(notification_id))
                .filter(dsl::account_id.eq(account_id)),
        )
        .execute(self)
        .await
        .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}
