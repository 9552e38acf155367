//! Account repository for managing admin and dealer accounts.

use std::future::Future;

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use jiff::Timestamp;
use uuid::Uuid;

use super::Pagination;
use crate::model::{Account, NewAccount, UpdateAccount};
use crate::types::AccountRole;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for account database operations.
///
/// Handles account lifecycle management including creation, profile updates,
/// suspension, soft deletion, and atomic balance adjustments.
pub trait AccountRepository {
    /// Creates a new account with complete profile information.
    ///
    /// Normalizes the email (trimmed, lower-cased) and display name before
    /// inserting.
    fn create_account(
        &mut self,
        new_account: NewAccount,
    ) -> impl Future<Output = PgResult<Account>> + Send;

    /// Finds an account by its unique identifier.
    ///
    /// Soft-deleted accounts are excluded.
    fn find_account_by_id(
        &mut self,
        account_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Account>>> + Send;

    /// Finds an account by email address.
    ///
    /// Email comparison is case-insensitive; soft-deleted accounts are
    /// excluded.
    fn find_account_by_email(
        &mut self,
        email: &str,
    ) -> impl Future<Output = PgResult<Option<Account>>> + Send;

    /// Updates an account with new information.
    ///
    /// Applies partial updates: only fields set to `Some(value)` are modified.
    fn update_account(
        &mut self,
        account_id: Uuid,
        updates: UpdateAccount,
    ) -> impl Future<Output = PgResult<Account>> + Send;

    /// Updates the account password hash.
    fn update_password(
        &mut self,
        account_id: Uuid,
        password_hash: String,
    ) -> impl Future<Output = PgResult<Account>> + Send;

    /// Suspends an account.
    fn suspend_account(
        &mut self,
        account_id: Uuid,
    ) -> impl Future<Output = PgResult<Account>> + Send;

    /// Lifts an account suspension.
    fn unsuspend_account(
        &mut self,
        account_id: Uuid,
    ) -> impl Future<Output = PgResult<Account>> + Send;

    /// Soft deletes an account by setting the deletion timestamp.
    ///
    /// Returns `None` if the account was not found.
    fn delete_account(
        &mut self,
        account_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Account>>> + Send;

    /// Lists accounts of the given role, newest first.
    ///
    /// An optional case-insensitive search term matches the display name,
    /// company name, or email.
    fn list_accounts_by_role(
        &mut self,
        role: AccountRole,
        search: Option<&str>,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<Account>>> + Send;

    /// Checks if an email address is already registered.
    fn email_exists(&mut self, email: &str) -> impl Future<Output = PgResult<bool>> + Send;

    /// Atomically adjusts an account balance by a signed delta.
    ///
    /// The update is guarded so the balance can never go negative: when the
    /// delta would overdraw the account (or the account does not exist), no
    /// row is updated and `None` is returned. Call this only inside a
    /// transaction together with the ledger insert.
    fn adjust_balance(
        &mut self,
        account_id: Uuid,
        delta: BigDecimal,
    ) -> impl Future<Output = PgResult<Option<Account>>> + Send;
}

impl AccountRepository for PgConnection {
    async fn create_account(&mut self, mut new_account: NewAccount) -> PgResult<Account> {
        use schema::accounts;

        // Normalize fields: trim whitespace
        new_account.display_name = new_account.display_name.trim().to_owned();
        new_account.email_address = new_account.email_address.trim().to_lowercase();
        if let Some(ref mut company) = new_account.company_name {
            *company = company.trim().to_owned();
        }

        diesel::insert_into(accounts::table)
            .values(&new_account)
            .returning(Account::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn find_account_by_id(&mut self, account_id: Uuid) -> PgResult<Option<Account>> {
        use schema::accounts::{self, dsl};

        accounts::table
            .filter(dsl::id.eq(account_id))
            .filter(dsl::deleted_at.is_null())
            .select(Account::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn find_account_by_email(&mut self, email: &str) -> PgResult<Option<Account>> {
        use schema::accounts::{self, dsl};

        accounts::table
            .filter(dsl::email_address.eq(email.trim().to_lowercase()))
            .filter(dsl::deleted_at.is_null())
            .select(Account::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_account(
        &mut self,
        account_id: Uuid,
        mut updates: UpdateAccount,
    ) -> PgResult<Account> {
        use schema::accounts::{self, dsl};

        // Normalize fields: trim whitespace
        if let Some(name) = updates.display_name.as_mut() {
            *name = name.trim().to_owned();
        }
        if let Some(email) = updates.email_address.as_mut() {
            *email = email.trim().to_lowercase();
        }

        let now = jiff_diesel::Timestamp::from(Timestamp::now());

        diesel::update(accounts::table.filter(dsl::id.eq(account_id)))
            .set((&updates, dsl::updated_at.eq(now)))
            .returning(Account::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn update_password(
        &mut self,
        account_id: Uuid,
        password_hash: String,
    ) -> PgResult<Account> {
        self.update_account(
            account_id,
            UpdateAccount {
                password_hash: Some(password_hash),
                ..Default::default()
            },
        )
        .await
    }

    async fn suspend_account(&mut self, account_id: Uuid) -> PgResult<Account> {
        self.update_account(
            account_id,
            UpdateAccount {
                is_suspended: Some(true),
                ..Default::default()
            },
        )
        .await
    }

    async fn unsuspend_account(&mut self, account_id: Uuid) -> PgResult<Account> {
        self.update_account(
            account_id,
            UpdateAccount {
                is_suspended: Some(false),
                ..Default::default()
            },
        )
        .await
    }

    async fn delete_account(&mut self, account_id: Uuid) -> PgResult<Option<Account>> {
        use schema::accounts::{self, dsl};

        diesel::update(accounts::table.filter(dsl::id.eq(account_id)))
            .set(dsl::deleted_at.eq(Some(jiff_diesel::Timestamp::from(Timestamp::now()))))
            .returning(Account::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_accounts_by_role(
        &mut self,
        role: AccountRole,
        search: Option<&str>,
        pagination: Pagination,
    ) -> PgResult<Vec<Account>> {
        use schema::accounts::{self, dsl};

        let mut query = accounts::table
            .filter(dsl::account_role.eq(role))
            .filter(dsl::deleted_at.is_null())
            .into_boxed();

        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            let pattern = format!("%{}%", term);
            query = query.filter(
                dsl::display_name
                    .ilike(pattern.clone())
                    .or(dsl::company_name.ilike(pattern.clone()))
                    .or(dsl::email_address.ilike(pattern)),
            );
        }

        query
            .order(dsl::created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Account::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn email_exists(&mut self, email: &str) -> PgResult<bool> {
        use schema::accounts::{self, dsl};

        let count: i64 = accounts::table
            .filter(dsl::email_address.eq(email.trim().to_lowercase()))
            .filter(dsl::deleted_at.is_null())
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(count > 0)
    }

    async fn adjust_balance(
        &mut self,
        account_id: Uuid,
        delta: BigDecimal,
    ) -> PgResult<Option<Account>> {
        use schema::accounts::{self, dsl};

        let now = jiff_diesel::Timestamp::from(Timestamp::now());
        let zero = BigDecimal::from(0);

        diesel::update(
            accounts::table
                .filter(dsl::id.eq(account_id))
                .filter(dsl::deleted_at.is_null())
                .filter(dsl::balance.ge(zero - delta.clone())),
        )
        .set((
            dsl::balance.eq(dsl::balance + delta),
            dsl::updated_at.eq(now),
        ))
        .returning(Account::as_returning())
        .get_result(self)
        .await
        .optional()
        .map_err(PgError::from)
    }
}
