//! Response payload types for all handlers.

mod accounts;
mod authentication;
mod balance;
mod dashboard;
mod error_response;
mod invoices;
mod notifications;
mod photos;
mod reference;
mod vehicles;

pub use accounts::{AccountProfile, Dealer};
pub use authentication::LoginResponse;
pub use balance::{BalanceRequestView, BalanceTransactionView};
pub use dashboard::{DealerDashboardView, PlatformDashboardView, StatusCount};
pub use error_response::ErrorResponse;
pub use invoices::{InvoiceItemView, InvoiceView};
pub use notifications::{Notification, UnreadStatus};
pub use photos::{Photo, PhotoVariantLink};
pub use reference::{
    AuctionItem, CityItem, CountryItem, MakeItem, ModelItem, PortItem, ShippingRateItem, StateItem,
};
pub use vehicles::{StatusEventView, VehicleView};
