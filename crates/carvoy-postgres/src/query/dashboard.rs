//! Dashboard aggregate queries.

use std::future::Future;

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::{AccountRepository, BalanceRequestRepository, InvoiceRepository, VehicleRepository};
use crate::types::{AccountRole, VehicleFilter, VehicleStatus};
use crate::{PgConnection, PgError, PgResult, schema};

/// Platform-wide aggregate numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformDashboard {
    /// Total non-deleted vehicles.
    pub vehicle_count: i64,
    /// Vehicle counts grouped by lifecycle status.
    pub vehicles_by_status: Vec<(VehicleStatus, i64)>,
    /// Total active dealer accounts.
    pub dealer_count: i64,
    /// Balance requests awaiting review.
    pub pending_balance_requests: i64,
    /// Sum of issued, unpaid invoice totals.
    pub outstanding_invoice_total: BigDecimal,
    /// Sum of all dealer balances.
    pub dealer_balance_total: BigDecimal,
}

/// Aggregate numbers for a single dealer's dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DealerDashboard {
    /// The dealer's vehicles grouped by lifecycle status.
    pub vehicles_by_status: Vec<(VehicleStatus, i64)>,
    /// Total vehicles owned by the dealer.
    pub vehicle_count: i64,
    /// Current account balance.
    pub balance: BigDecimal,
    /// Sum of the dealer's issued, unpaid invoice totals.
    pub outstanding_invoice_total: BigDecimal,
}

/// Repository for dashboard aggregates.
///
/// Composes the per-entity repositories into the two dashboard payloads so
/// handlers make a single call.
pub trait DashboardRepository {
    /// Collects the platform-wide dashboard for admins.
    fn load_platform_dashboard(
        &mut self,
    ) -> impl Future<Output = PgResult<PlatformDashboard>> + Send;

    /// Collects the dashboard of one dealer.
    ///
    /// Returns `None` when the account does not exist.
    fn load_dealer_dashboard(
        &mut self,
        dealer_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<DealerDashboard>>> + Send;
}

impl DashboardRepository for PgConnection {
    async fn load_platform_dashboard(&mut self) -> PgResult<PlatformDashboard> {
        use schema::accounts::{self, dsl};

        let vehicles_by_status = self.count_vehicles_by_status(None).await?;
        let vehicle_count = vehicles_by_status.iter().map(|(_, n)| n).sum();

        let dealer_count = accounts::table
            .filter(dsl::account_role.eq(AccountRole::Dealer))
            .filter(dsl::deleted_at.is_null())
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        let dealer_balance_total: Option<BigDecimal> = accounts::table
            .filter(dsl::account_role.eq(AccountRole::Dealer))
            .filter(dsl::deleted_at.is_null())
            .select(diesel::dsl::sum(dsl::balance))
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        let pending_balance_requests = self.count_pending_balance_requests().await?;
        let outstanding_invoice_total = self.sum_outstanding_invoices(None).await?;

        Ok(PlatformDashboard {
            vehicle_count,
            vehicles_by_status,
            dealer_count,
            pending_balance_requests,
            outstanding_invoice_total,
            dealer_balance_total: dealer_balance_total.unwrap_or_else(|| BigDecimal::from(0)),
        })
    }

    async fn load_dealer_dashboard(
        &mut self,
        dealer_id: Uuid,
    ) -> PgResult<Option<DealerDashboard>> {
        let Some(account) = self.find_account_by_id(dealer_id).await? else {
            return Ok(None);
        };

        let vehicles_by_status = self.count_vehicles_by_status(Some(dealer_id)).await?;
        let vehicle_count = self
            .count_vehicles(VehicleFilter::for_dealer(dealer_id))
            .await?;
        let outstanding_invoice_total = self.sum_outstanding_invoices(Some(dealer_id)).await?;

        Ok(Some(DealerDashboard {
            vehicles_by_status,
            vehicle_count,
            balance: account.balance,
            outstanding_invoice_total,
        }))
    }
}
