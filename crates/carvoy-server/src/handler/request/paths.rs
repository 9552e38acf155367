//! `Path` parameter types for `{id}`-style routes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! path_params {
    ($(#[$doc:meta] $name:ident { $field:ident }),+ $(,)?) => {$(
        #[$doc]
        #[must_use]
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// Unique identifier of the addressed resource.
            pub $field: Uuid,
        }
    )+};
}

path_params! {
    /// `Path` param for `{dealerId}` handlers.
    DealerPathParams { dealer_id },
    /// `Path` param for `{vehicleId}` handlers.
    VehiclePathParams { vehicle_id },
    /// `Path` param for `{photoId}` handlers.
    PhotoPathParams { photo_id },
    /// `Path` param for `{invoiceId}` handlers.
    InvoicePathParams { invoice_id },
    /// `Path` param for `{requestId}` handlers.
    BalanceRequestPathParams { request_id },
    /// `Path` param for `{auctionId}` handlers.
    AuctionPathParams { auction_id },
    /// `Path` param for `{countryId}` handlers.
    CountryPathParams { country_id },
    /// `Path` param for `{stateId}` handlers.
    StatePathParams { state_id },
    /// `Path` param for `{cityId}` handlers.
    CityPathParams { city_id },
    /// `Path` param for `{portId}` handlers.
    PortPathParams { port_id },
    /// `Path` param for `{makeId}` handlers.
    MakePathParams { make_id },
    /// `Path` param for `{modelId}` handlers.
    ModelPathParams { model_id },
    /// `Path` param for `{notificationId}` handlers.
    NotificationPathParams { notification_id },
    /// `Path` param for `{rateId}` handlers.
    RatePathParams { rate_id },
}
