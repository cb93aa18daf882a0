//! Configuration for the OTP service

use std::time::Duration;

use oa_shared::CacheConfig;

use crate::domain::entities::otp_code::DEFAULT_OTP_TTL_SECONDS;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// How long an issued code stays valid
    pub code_ttl: Duration,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl: Duration::from_secs(DEFAULT_OTP_TTL_SECONDS),
        }
    }
}

impl From<&CacheConfig> for OtpServiceConfig {
    fn from(config: &CacheConfig) -> Self {
        Self {
            code_ttl: Duration::from_secs(config.otp_ttl_seconds.max(1)),
        }
    }
}
