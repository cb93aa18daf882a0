//! Token service module for JWT management
//!
//! This module signs HS256 access tokens whose subject is a pseudonymous
//! hash of the phone number and the issuance second.

mod service;

#[cfg(test)]
mod tests;

pub use service::{IssuedToken, TokenService};
