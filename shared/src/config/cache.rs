//! OTP store configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// In-memory OTP store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// How often the background sweep removes expired entries, in seconds
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,

    /// Lifetime of a generated OTP, in seconds
    #[serde(default = "default_otp_ttl")]
    pub otp_ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_interval_seconds: default_sweep_interval(),
            otp_ttl_seconds: default_otp_ttl(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            sweep_interval_seconds: env_or("CACHE_SWEEP_INTERVAL_SECONDS", default_sweep_interval())
                .max(1),
            otp_ttl_seconds: env_or("OTP_TTL_SECONDS", default_otp_ttl()).max(1),
        }
    }
}

fn default_sweep_interval() -> u64 {
    60 // 1 minute
}

fn default_otp_ttl() -> u64 {
    120 // 2 minutes
}
