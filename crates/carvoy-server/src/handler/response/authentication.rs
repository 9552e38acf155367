//! Authentication response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AccountProfile;

/// Response returned on a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// Token expiration time.
    pub expires_at: Timestamp,
    /// The authenticated account.
    pub account: AccountProfile,
}
