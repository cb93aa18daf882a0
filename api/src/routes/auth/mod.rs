//! Authentication route handlers
//!
//! - `POST /api/v1/auth/request` starts an OTP challenge
//! - `POST /api/v1/auth/verify` completes it and returns a bearer token

pub mod request;
pub mod verify;

pub use request::request_otp;
pub use verify::verify_otp;
