//! Shared wiring for route tests

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use oa_api::{build_state, AppState};
use oa_infra::{InMemoryRateLimiter, InMemoryUserRepository, OtpStore};
use oa_shared::{AppConfig, JwtConfig};

pub const PHONE: &str = "09123456789";

pub type TestState = AppState<InMemoryUserRepository, OtpStore, InMemoryRateLimiter>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub store: Arc<OtpStore>,
    pub users: Arc<InMemoryUserRepository>,
}

pub fn context() -> TestContext {
    context_with_jwt(JwtConfig::new("route-test-secret", "15m"))
}

pub fn context_with_jwt(jwt: JwtConfig) -> TestContext {
    let config = AppConfig {
        jwt,
        ..AppConfig::default()
    };
    let store = Arc::new(OtpStore::new(Duration::from_secs(60)));
    let users = Arc::new(InMemoryUserRepository::new());
    let state = build_state(&config, Arc::clone(&users), Arc::clone(&store))
        .expect("default configuration is valid");

    TestContext {
        state: web::Data::new(state),
        store,
        users,
    }
}
