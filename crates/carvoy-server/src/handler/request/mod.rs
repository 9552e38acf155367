//! Request payload and parameter types for all handlers.

mod authentication;
mod balance;
mod dealers;
mod invoices;
mod pagination;
mod paths;
mod reference;
mod vehicles;

pub use authentication::{ChangePasswordRequest, LoginRequest};
pub use balance::{
    BalanceRequestListParams, CreateBalanceRequestRequest, SettleBalanceRequestRequest,
    TransactionParams,
};
pub use dealers::{CreateDealerRequest, DealerListParams, UpdateDealerRequest};
pub use invoices::{CreateInvoiceRequest, InvoiceItemInput, InvoiceListParams, MarkPaidRequest};
pub use pagination::PaginationParams;
pub use paths::{
    AuctionPathParams, BalanceRequestPathParams, CityPathParams, CountryPathParams,
    DealerPathParams, InvoicePathParams, MakePathParams, ModelPathParams, NotificationPathParams,
    PhotoPathParams, PortPathParams, RatePathParams, StatePathParams, VehiclePathParams,
};
pub use reference::{
    CreateAuctionRequest, CreateCityRequest, CreateCountryRequest, CreateMakeRequest,
    CreateModelRequest, CreatePortRequest, CreateShippingRateRequest, CreateStateRequest,
    UpdateNameRequest, UpdateShippingRateRequest,
};
pub use vehicles::{
    ChangeVehicleStatusRequest, CreateVehicleRequest, UpdateVehicleRequest, VehicleListParams,
};
