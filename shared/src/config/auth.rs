//! Token signing configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the HMAC signing secret
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";

/// Environment variable holding the access token lifetime (e.g. `15m`)
pub const ACCESS_EXPIRY_ENV: &str = "ACCESS_EXPIRY";

/// JWT authentication configuration
///
/// Both values are kept as raw strings: a missing or malformed value is
/// reported when the token service first needs it, not while loading.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret used for HS256 signing
    #[serde(default)]
    pub secret: String,

    /// Access token lifetime as a duration string (`15m`, `1h30m`, `900s`)
    #[serde(default)]
    pub access_expiry: String,
}

impl JwtConfig {
    /// Create a new JWT configuration
    pub fn new(secret: impl Into<String>, access_expiry: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_expiry: access_expiry.into(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var(SECRET_KEY_ENV).unwrap_or_default(),
            access_expiry: std::env::var(ACCESS_EXPIRY_ENV).unwrap_or_default(),
        }
    }

    /// Parse the configured access token lifetime
    pub fn access_lifetime(&self) -> Result<Duration, humantime::DurationError> {
        humantime::parse_duration(self.access_expiry.trim())
    }

    /// Whether a signing secret is configured at all
    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }
}
