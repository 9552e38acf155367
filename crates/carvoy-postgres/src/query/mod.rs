//! Repository traits implemented on the async database connection.
//!
//! Each domain entity gets a repository trait; all of them are implemented
//! for [`PgConnection`] so a single pooled connection (or a transaction
//! handle) gives access to every operation.
//!
//! [`PgConnection`]: crate::PgConnection

mod account;
mod account_notification;
mod balance_request;
mod balance_transaction;
mod catalog;
mod dashboard;
mod geo;
mod invoice;
mod shipping_rate;
mod vehicle;
mod vehicle_photo;
mod vehicle_status_event;

pub use account::AccountRepository;
pub use account_notification::AccountNotificationRepository;
pub use balance_request::BalanceRequestRepository;
pub use balance_transaction::BalanceTransactionRepository;
pub use catalog::CatalogRepository;
pub use dashboard::{DashboardRepository, DealerDashboard, PlatformDashboard};
pub use geo::GeoRepository;
pub use invoice::InvoiceRepository;
pub use shipping_rate::ShippingRateRepository;
pub use vehicle::VehicleRepository;
pub use vehicle_photo::VehiclePhotoRepository;
pub use vehicle_status_event::VehicleStatusEventRepository;

use serde::{Deserialize, Serialize};

/// Maximum number of records a single page may return.
pub const MAX_PAGE_LIMIT: i64 = 200;

/// Default number of records per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Offset-based pagination parameters for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}

impl Pagination {
    /// Creates a new pagination instance with clamped bounds.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_LIMIT),
            offset: offset.max(0),
        }
    }

    /// Creates pagination from a 1-based page number and page size.
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = page_size.clamp(1, MAX_PAGE_LIMIT);
        Self {
            limit: page_size,
            offset: (page - 1) * page_size,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_clamps_bounds() {
        let pagination = Pagination::new(0, -10);
        assert_eq!(pagination.limit, 1);
        assert_eq!(pagination.offset, 0);

        let pagination = Pagination::new(10_000, 25);
        assert_eq!(pagination.limit, MAX_PAGE_LIMIT);
        assert_eq!(pagination.offset, 25);
    }

    #[test]
    fn pagination_from_page() {
        let pagination = Pagination::from_page(1, 20);
        assert_eq!(pagination.offset, 0);

        let pagination = Pagination::from_page(3, 20);
        assert_eq!(pagination.offset, 40);

        let pagination = Pagination::from_page(0, 20);
        assert_eq!(pagination.offset, 0);
    }
}
