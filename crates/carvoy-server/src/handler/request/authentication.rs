//! Authentication request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for logging in.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account email address.
    #[validate(email)]
    pub email_address: String,
    /// Account password.
    #[validate(length(min = 1, max = 256))]
    pub password: String,
}

/// Request payload for changing the own password.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password, verified before the change.
    #[validate(length(min = 1, max = 256))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 10, max = 256))]
    pub new_password: String,
}
