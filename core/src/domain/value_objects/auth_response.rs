//! Authentication response value objects for API responses.

use serde::{Deserialize, Serialize};

/// Authentication response returned after a successful verification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Signed bearer token
    pub access_token: String,

    /// Always `"Bearer"`
    pub token_type: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    /// Whether this verification created the user record
    pub is_new_user: bool,
}

impl AuthResponse {
    /// Creates a new bearer authentication response
    pub fn bearer(access_token: String, expires_in: i64, is_new_user: bool) -> Self {
        Self {
            access_token,
            token_type: String::from("Bearer"),
            expires_in,
            is_new_user,
        }
    }
}

/// Outcome of an accepted OTP request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OtpRequestResult {
    /// Seconds until the issued code expires
    pub expires_in: u64,
}
