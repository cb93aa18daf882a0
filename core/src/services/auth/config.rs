//! Configuration for the authentication service

use std::time::Duration;

use oa_shared::config::OtpRateLimit;

use crate::errors::DomainError;

/// Sliding-window admission policy: at most `max_requests` per `window`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    max_requests: u32,
    window: Duration,
}

impl RateLimitPolicy {
    /// Create a policy; the window must be at least one second
    ///
    /// `max_requests == 0` is accepted and limits every request.
    pub fn new(max_requests: u32, window_seconds: u64) -> Result<Self, DomainError> {
        if window_seconds == 0 {
            return Err(DomainError::Validation {
                message: "rate limit window must be at least one second".to_string(),
            });
        }
        Ok(Self {
            max_requests,
            window: Duration::from_secs(window_seconds),
        })
    }

    /// Maximum admitted events per window
    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// Window length
    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Default for RateLimitPolicy {
    /// Three OTP requests per ten minutes
    fn default() -> Self {
        Self {
            max_requests: 3,
            window: Duration::from_secs(600),
        }
    }
}

impl TryFrom<&OtpRateLimit> for RateLimitPolicy {
    type Error = DomainError;

    fn try_from(config: &OtpRateLimit) -> Result<Self, Self::Error> {
        Self::new(config.max_requests, config.window_seconds)
    }
}

/// Configuration for the authentication service
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    /// Admission policy for OTP requests, applied per phone number
    pub otp_rate_limit: RateLimitPolicy,
}
