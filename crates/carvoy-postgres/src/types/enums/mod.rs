//! Rust mappings for the PostgreSQL enum types.

mod account_role;
mod balance_request_status;
mod invoice_status;
mod notification_event;
mod payment_method;
mod transaction_kind;
mod vehicle_status;

pub use account_role::AccountRole;
pub use balance_request_status::BalanceRequestStatus;
pub use invoice_status::InvoiceStatus;
pub use notification_event::NotificationEvent;
pub use payment_method::PaymentMethod;
pub use transaction_kind::TransactionKind;
pub use vehicle_status::VehicleStatus;
