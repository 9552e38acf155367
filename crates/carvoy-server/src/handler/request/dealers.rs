//! Dealer management request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for dealer listings.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealerListParams {
    /// Case-insensitive substring match on name, company, or email.
    pub search: Option<String>,
    /// Records to skip.
    pub offset: Option<u32>,
    /// Maximum records to return.
    pub limit: Option<u32>,
}

impl DealerListParams {
    /// Extracts the pagination portion of the parameters.
    pub fn pagination(&self) -> super::PaginationParams {
        super::PaginationParams {
            offset: self.offset,
            limit: self.limit,
        }
    }
}

/// Request payload for creating a dealer account.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealerRequest {
    /// Display name.
    #[validate(length(min = 2, max = 100))]
    pub display_name: String,
    /// Email address used for login.
    #[validate(email)]
    pub email_address: String,
    /// Initial password; the dealer should change it after first login.
    #[validate(length(min = 10, max = 256))]
    pub password: String,
    /// Company name.
    #[validate(length(max = 200))]
    pub company_name: Option<String>,
    /// Contact phone number.
    #[validate(length(max = 32))]
    pub phone_number: Option<String>,
}

/// Request payload for updating a dealer account.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDealerRequest {
    /// Display name.
    #[validate(length(min = 2, max = 100))]
    pub display_name: Option<String>,
    /// Email address used for login.
    #[validate(email)]
    pub email_address: Option<String>,
    /// Company name.
    #[validate(length(max = 200))]
    pub company_name: Option<String>,
    /// Contact phone number.
    #[validate(length(max = 32))]
    pub phone_number: Option<String>,
}
