//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Rate limiting configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Limits on OTP challenge requests per phone number
    #[serde(default)]
    pub otp: OtpRateLimit,
}

/// Sliding-window limit for OTP requests
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpRateLimit {
    /// Max OTP requests per phone number inside the window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    /// Window length in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,
}

impl Default for OtpRateLimit {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_seconds: default_window_seconds(),
        }
    }
}

impl RateLimitConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            otp: OtpRateLimit {
                max_requests: env_or("OTP_RATE_LIMIT_MAX", default_max_requests()),
                window_seconds: env_or("OTP_RATE_LIMIT_WINDOW_SECONDS", default_window_seconds())
                    .max(1),
            },
        }
    }
}

fn default_max_requests() -> u32 {
    3
}

fn default_window_seconds() -> u64 {
    600 // 10 minutes
}
