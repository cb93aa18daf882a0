//! Error kinds raised by the authentication flow
//!
//! Each kind maps to exactly one caller-visible outcome; the HTTP layer
//! matches on the variant, never on the message text.

use thiserror::Error;

/// Admission and input errors raised before the OTP lifecycle is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid phone format: {phone}")]
    InvalidPhoneFormat { phone: String },

    #[error("Too many requests, retry after {retry_after_seconds} seconds")]
    RateLimitExceeded { retry_after_seconds: u64 },
}

impl AuthError {
    /// Retry hint rounded up to whole minutes, as shown to clients
    pub fn retry_after_minutes(&self) -> Option<u64> {
        match self {
            AuthError::RateLimitExceeded {
                retry_after_seconds,
            } => Some(retry_after_seconds.div_ceil(60)),
            _ => None,
        }
    }
}

/// OTP lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("Failed to generate verification code: {message}")]
    Generation { message: String },

    #[error("No active verification code")]
    NotFound,

    #[error("Stored verification code is malformed")]
    InvalidState,

    #[error("Verification code does not match")]
    Mismatch,
}

/// Token issuing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token configuration error: {message}")]
    Config { message: String },

    #[error("Token signing failed: {message}")]
    Signing { message: String },

    #[error("Invalid token: {message}")]
    Invalid { message: String },
}
