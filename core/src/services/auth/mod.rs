//! Authentication service module
//!
//! This module wires the OTP flow together:
//! - Phone validation and per-phone rate limiting of OTP requests
//! - OTP issuing and verification
//! - Idempotent user registration and token issuing on success

mod config;
mod rate_limiter;
mod service;

#[cfg(test)]
mod tests;

pub use config::{AuthServiceConfig, RateLimitPolicy};
pub use rate_limiter::{otp_rate_limit_key, RateLimitDecision, RateLimiterTrait};
pub use service::AuthService;
