//! # Infrastructure Layer
//!
//! Concrete implementations of the seams defined in `oa_core`:
//!
//! - **Cache**: a generic expiring key/value store with a cancellable
//!   background sweep, and the OTP store built on it
//! - **Services**: the in-memory sliding-window rate limiter
//! - **Database**: user repositories (in-memory, and MySQL via SQLx)
//!
//! ## Features
//!
//! - `mysql`: Enable the MySQL user repository (default)

/// Cache module - expiring in-memory store and OTP storage
pub mod cache;

/// Database module - user repository implementations
pub mod database;

/// Services module - infrastructure service implementations
pub mod services;

pub use cache::{ExpiringStore, OtpStore};
pub use database::InMemoryUserRepository;
#[cfg(feature = "mysql")]
pub use database::MySqlUserRepository;
pub use services::auth::InMemoryRateLimiter;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
