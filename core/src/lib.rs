//! # OTP Auth Core
//!
//! Core business logic and domain layer for the OTP auth backend.
//! This crate contains domain entities, the OTP, token and authentication
//! services, repository interfaces and the error taxonomy the HTTP layer
//! maps to responses.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
