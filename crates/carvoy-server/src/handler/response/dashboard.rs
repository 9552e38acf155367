//! Dashboard response types.

use bigdecimal::BigDecimal;
use carvoy_postgres::query::{DealerDashboard, PlatformDashboard};
use carvoy_postgres::types::VehicleStatus;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Vehicle count in one lifecycle status.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    /// Lifecycle status.
    pub status: VehicleStatus,
    /// Number of vehicles in that status.
    pub count: i64,
}

/// Platform-wide dashboard for admins.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDashboardView {
    /// Total non-deleted vehicles.
    pub vehicle_count: i64,
    /// Vehicle counts grouped by status.
    pub vehicles_by_status: Vec<StatusCount>,
    /// Total active dealer accounts.
    pub dealer_count: i64,
    /// Balance requests awaiting review.
    pub pending_balance_requests: i64,
    /// Sum of issued, unpaid invoice totals.
    pub outstanding_invoice_total: BigDecimal,
    /// Sum of all dealer balances.
    pub dealer_balance_total: BigDecimal,
}

impl From<PlatformDashboard> for PlatformDashboardView {
    fn from(dashboard: PlatformDashboard) -> Self {
        Self {
            vehicle_count: dashboard.vehicle_count,
            vehicles_by_status: dashboard
                .vehicles_by_status
                .into_iter()
                .map(|(status, count)| StatusCount { status, count })
                .collect(),
            dealer_count: dashboard.dealer_count,
            pending_balance_requests: dashboard.pending_balance_requests,
            outstanding_invoice_total: dashboard.outstanding_invoice_total,
            dealer_balance_total: dashboard.dealer_balance_total,
        }
    }
}

/// Dashboard of a single dealer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealerDashboardView {
    /// The dealer's vehicles grouped by status.
    pub vehicles_by_status: Vec<StatusCount>,
    /// Total vehicles owned by the dealer.
    pub vehicle_count: i64,
    /// Current account balance.
    pub balance: BigDecimal,
    /// Sum of the dealer's issued, unpaid invoice totals.
    pub outstanding_invoice_total: BigDecimal,
}

impl From<DealerDashboard> for DealerDashboardView {
    fn from(dashboard: DealerDashboard) -> Self {
        Self {
            vehicles_by_status: dashboard
                .vehicles_by_status
                .into_iter()
                .map(|(status, count)| StatusCount { status, count })
                .collect(),
            vehicle_count: dashboard.vehicle_count,
            balance: dashboard.balance,
            outstanding_invoice_total: dashboard.outstanding_invoice_total,
        }
    }
}
