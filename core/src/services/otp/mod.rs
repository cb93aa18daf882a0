//! OTP service module
//!
//! This module owns the one-time passcode lifecycle:
//! - Secure six digit code generation
//! - Time-bounded storage through a [`CacheServiceTrait`] implementation
//! - Verification with a precise failure classification
//!
//! Admission control is not performed here; callers check the rate limiter
//! before [`OtpService::request`].

mod config;
mod generator;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use generator::{CodeGenerator, OsCodeGenerator};
pub use service::OtpService;
pub use traits::CacheServiceTrait;
