//! Rate limiting seam for the authentication service

use async_trait::async_trait;

use super::config::RateLimitPolicy;

/// Outcome of an admission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// The event was admitted and recorded
    Allowed,
    /// The event was rejected; nothing was recorded
    Limited {
        /// Seconds until the oldest counted event leaves the window, at least 1
        retry_after_seconds: u64,
    },
}

impl RateLimitDecision {
    /// Whether the event was rejected
    pub fn is_limited(&self) -> bool {
        matches!(self, RateLimitDecision::Limited { .. })
    }
}

/// Sliding-window rate limiter keyed by an arbitrary string
///
/// Deciding and recording must be atomic per key: two concurrent checks can
/// never both take the last free slot.
#[async_trait]
pub trait RateLimiterTrait: Send + Sync {
    /// Check whether a new event for `key` is admitted under `policy`
    async fn check(&self, key: &str, policy: RateLimitPolicy) -> RateLimitDecision;
}

/// Limiter key for OTP requests of a phone number
pub fn otp_rate_limit_key(phone: &str) -> String {
    format!("otp:{}", phone)
}
