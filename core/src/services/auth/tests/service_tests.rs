//! Unit tests for the authentication service

use std::sync::Arc;

use oa_shared::JwtConfig;

use super::mocks::{FixedGenerator, MockCache, MockRateLimiter, MockUserRepository};
use crate::errors::{AuthError, DomainError, OtpError, TokenError};
use crate::services::auth::{AuthService, AuthServiceConfig, RateLimitPolicy};
use crate::services::otp::{OtpService, OtpServiceConfig};
use crate::services::token::TokenService;

const PHONE: &str = "09123456789";

type TestAuthService = AuthService<MockUserRepository, MockCache, MockRateLimiter, FixedGenerator>;

struct Fixture {
    service: TestAuthService,
    users: Arc<MockUserRepository>,
    cache: Arc<MockCache>,
    limiter: Arc<MockRateLimiter>,
}

fn fixture_with(
    users: MockUserRepository,
    limiter: MockRateLimiter,
    jwt: JwtConfig,
) -> Fixture {
    let users = Arc::new(users);
    let cache = Arc::new(MockCache::default());
    let limiter = Arc::new(limiter);
    let otp_service = Arc::new(OtpService::with_generator(
        cache.clone(),
        FixedGenerator(42),
        OtpServiceConfig::default(),
    ));
    let service = AuthService::new(
        users.clone(),
        otp_service,
        limiter.clone(),
        Arc::new(TokenService::new(jwt)),
        AuthServiceConfig::default(),
    );
    Fixture {
        service,
        users,
        cache,
        limiter,
    }
}

fn fixture() -> Fixture {
    fixture_with(
        MockUserRepository::new(),
        MockRateLimiter::allowing(),
        JwtConfig::new("test-secret", "15m"),
    )
}

#[tokio::test]
async fn test_request_otp_checks_limiter_with_phone_key() {
    let f = fixture();

    let result = f.service.request_otp(PHONE).await.unwrap();

    assert_eq!(result.expires_in, 120);
    assert_eq!(f.cache.stored(PHONE).as_deref(), Some("000042"));
    let checks = f.limiter.checks.lock().unwrap();
    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0].0, "otp:09123456789");
    assert_eq!(checks[0].1, RateLimitPolicy::new(3, 600).unwrap());
}

#[tokio::test]
async fn test_request_otp_rejects_invalid_phone_before_limiter() {
    let f = fixture();

    let result = f.service.request_otp("12345").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidPhoneFormat { .. }))
    ));
    assert!(f.limiter.checks.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_request_otp_limited_does_not_issue_code() {
    let f = fixture_with(
        MockUserRepository::new(),
        MockRateLimiter::limiting(125),
        JwtConfig::new("test-secret", "15m"),
    );

    let error = f.service.request_otp(PHONE).await.unwrap_err();

    let DomainError::Auth(auth) = error else {
        panic!("expected an auth error");
    };
    assert_eq!(
        auth,
        AuthError::RateLimitExceeded {
            retry_after_seconds: 125
        }
    );
    assert_eq!(auth.retry_after_minutes(), Some(3));
    assert!(f.cache.stored(PHONE).is_none());
}

#[tokio::test]
async fn test_verify_otp_end_to_end() {
    let f = fixture();
    f.service.request_otp(PHONE).await.unwrap();
    let code = f.cache.stored(PHONE).unwrap();
    assert_eq!(code.len(), 6);

    let response = f.service.verify_otp(PHONE, &code).await.unwrap();

    assert_eq!(f.users.register_calls(), 1);
    assert!(response.is_new_user);
    assert_eq!(response.token_type, "Bearer");
    assert_eq!(response.expires_in, 900);

    let claims = TokenService::new(JwtConfig::new("test-secret", "15m"))
        .decode_token(&response.access_token)
        .unwrap();
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_verify_otp_twice_registers_once() {
    let f = fixture();
    f.service.request_otp(PHONE).await.unwrap();

    let first = f.service.verify_otp(PHONE, "000042").await.unwrap();
    let second = f.service.verify_otp(PHONE, "000042").await.unwrap();

    assert!(first.is_new_user);
    assert!(!second.is_new_user);
    assert_eq!(f.users.users.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_verify_otp_failures_skip_registration() {
    let f = fixture();

    let not_found = f.service.verify_otp(PHONE, "000042").await;
    assert!(matches!(not_found, Err(DomainError::Otp(OtpError::NotFound))));

    f.service.request_otp(PHONE).await.unwrap();
    let mismatch = f.service.verify_otp(PHONE, "999999").await;
    assert!(matches!(mismatch, Err(DomainError::Otp(OtpError::Mismatch))));

    f.cache
        .codes
        .lock()
        .unwrap()
        .insert(PHONE.to_string(), "garbage".to_string());
    let invalid = f.service.verify_otp(PHONE, "000042").await;
    assert!(matches!(invalid, Err(DomainError::Otp(OtpError::InvalidState))));

    assert_eq!(f.users.register_calls(), 0);
}

#[tokio::test]
async fn test_verify_otp_registration_failure_is_persistence_error() {
    let f = fixture_with(
        MockUserRepository::failing(),
        MockRateLimiter::allowing(),
        JwtConfig::new("test-secret", "15m"),
    );
    f.service.request_otp(PHONE).await.unwrap();

    let result = f.service.verify_otp(PHONE, "000042").await;

    assert!(matches!(result, Err(DomainError::Persistence { .. })));
}

#[tokio::test]
async fn test_verify_otp_bad_token_config() {
    let f = fixture_with(
        MockUserRepository::new(),
        MockRateLimiter::allowing(),
        JwtConfig::new("test-secret", "whenever"),
    );
    f.service.request_otp(PHONE).await.unwrap();

    let result = f.service.verify_otp(PHONE, "000042").await;

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Config { .. }))
    ));
    // Registration happens before token issuing
    assert_eq!(f.users.register_calls(), 1);
}

#[tokio::test]
async fn test_verify_otp_empty_secret_is_signing_error() {
    let f = fixture_with(
        MockUserRepository::new(),
        MockRateLimiter::allowing(),
        JwtConfig::new("", "15m"),
    );
    f.service.request_otp(PHONE).await.unwrap();

    let result = f.service.verify_otp(PHONE, "000042").await;

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Signing { .. }))
    ));
}

#[test]
fn test_policy_rejects_zero_window() {
    assert!(RateLimitPolicy::new(3, 0).is_err());
    let policy = RateLimitPolicy::new(0, 1).unwrap();
    assert_eq!(policy.max_requests(), 0);
}
