//! End-to-end OTP login flow over the in-memory infrastructure

use std::sync::Arc;
use std::time::Duration;

use oa_core::errors::{AuthError, DomainError, OtpError};
use oa_core::repositories::UserRepository;
use oa_core::services::auth::{AuthService, AuthServiceConfig};
use oa_core::services::otp::{CacheServiceTrait, OtpService, OtpServiceConfig};
use oa_core::services::token::TokenService;
use oa_infra::{InMemoryRateLimiter, InMemoryUserRepository, OtpStore};
use oa_shared::JwtConfig;
use tokio::time::sleep;

const PHONE: &str = "09123456789";

struct Harness {
    auth: AuthService<InMemoryUserRepository, OtpStore, InMemoryRateLimiter>,
    store: Arc<OtpStore>,
    users: Arc<InMemoryUserRepository>,
    tokens: Arc<TokenService>,
}

fn harness() -> Harness {
    let store = Arc::new(OtpStore::new(Duration::from_secs(60)));
    let users = Arc::new(InMemoryUserRepository::new());
    let tokens = Arc::new(TokenService::new(JwtConfig::new("integration-secret", "15m")));
    let auth = AuthService::new(
        users.clone(),
        Arc::new(OtpService::new(store.clone(), OtpServiceConfig::default())),
        Arc::new(InMemoryRateLimiter::new()),
        tokens.clone(),
        AuthServiceConfig::default(),
    );
    Harness {
        auth,
        store,
        users,
        tokens,
    }
}

#[tokio::test(start_paused = true)]
async fn test_request_then_verify_issues_token() {
    let h = harness();

    h.auth.request_otp(PHONE).await.unwrap();
    let code = h.store.get_code(PHONE).await.expect("code stored");
    assert_eq!(code.len(), 6);
    assert!(code.bytes().all(|b| b.is_ascii_digit()));

    let response = h.auth.verify_otp(PHONE, &code).await.unwrap();

    assert!(response.is_new_user);
    let claims = h.tokens.decode_token(&response.access_token).unwrap();
    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, 900);
    assert!(h.users.find_by_phone(PHONE).await.unwrap().is_some());

    h.store.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_code_expires_after_two_minutes() {
    let h = harness();
    h.auth.request_otp(PHONE).await.unwrap();
    let code = h.store.get_code(PHONE).await.unwrap();

    sleep(Duration::from_secs(120)).await;

    let result = h.auth.verify_otp(PHONE, &code).await;
    assert!(matches!(result, Err(DomainError::Otp(OtpError::NotFound))));
    h.store.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_fourth_request_is_rate_limited_until_window_passes() {
    let h = harness();
    for _ in 0..3 {
        h.auth.request_otp(PHONE).await.unwrap();
    }

    let limited = h.auth.request_otp(PHONE).await;
    match limited {
        Err(DomainError::Auth(AuthError::RateLimitExceeded {
            retry_after_seconds,
        })) => assert!((1..=600).contains(&retry_after_seconds)),
        other => panic!("expected rate limit, got {:?}", other),
    }

    sleep(Duration::from_secs(600)).await;
    assert!(h.auth.request_otp(PHONE).await.is_ok());
    h.store.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_latest_code_wins() {
    let h = harness();
    h.auth.request_otp(PHONE).await.unwrap();
    let first = h.store.get_code(PHONE).await.unwrap();
    h.auth.request_otp(PHONE).await.unwrap();
    let second = h.store.get_code(PHONE).await.unwrap();

    if first != second {
        assert!(matches!(
            h.auth.verify_otp(PHONE, &first).await,
            Err(DomainError::Otp(OtpError::Mismatch))
        ));
    }
    assert!(h.auth.verify_otp(PHONE, &second).await.is_ok());
    h.store.shutdown().await;
}
