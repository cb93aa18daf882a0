//! Shared utilities and common types for the OTP auth server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response envelope and error codes
//! - Utility functions (phone validation, masking)
//! - Pagination and response types

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    RateLimitConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{BasicResponse, Pagination, PaginatedResponse, PaginationMeta};
pub use utils::phone;
