//! HTTP layer for the OTP auth server
//!
//! Exposes the application factory so integration tests can drive the
//! same routes the binary serves.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{build_state, create_app, AppState};
