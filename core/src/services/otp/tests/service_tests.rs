//! Unit tests for the OTP service

use std::sync::Arc;
use std::time::Duration;

use super::mocks::{FailingGenerator, FixedGenerator, MockCache};
use crate::errors::OtpError;
use crate::services::otp::{CodeGenerator, OsCodeGenerator, OtpService, OtpServiceConfig};

const PHONE: &str = "09123456789";

fn service_with(value: u32) -> (OtpService<MockCache, FixedGenerator>, Arc<MockCache>) {
    let cache = Arc::new(MockCache::new());
    let service = OtpService::with_generator(
        cache.clone(),
        FixedGenerator(value),
        OtpServiceConfig::default(),
    );
    (service, cache)
}

#[tokio::test]
async fn test_request_stores_zero_padded_code() {
    let (service, cache) = service_with(42);

    service.request(PHONE).await.unwrap();

    assert_eq!(cache.stored(PHONE).as_deref(), Some("000042"));
    assert_eq!(*cache.last_ttl.lock().unwrap(), Some(Duration::from_secs(120)));
}

#[tokio::test]
async fn test_request_overwrites_previous_code() {
    let cache = Arc::new(MockCache::new());
    cache.insert_raw(PHONE, "111111");
    let service = OtpService::with_generator(
        cache.clone(),
        FixedGenerator(222_222),
        OtpServiceConfig::default(),
    );

    service.request(PHONE).await.unwrap();

    assert_eq!(cache.stored(PHONE).as_deref(), Some("222222"));
}

#[tokio::test]
async fn test_request_generation_failure() {
    let cache = Arc::new(MockCache::new());
    let service =
        OtpService::with_generator(cache.clone(), FailingGenerator, OtpServiceConfig::default());

    let result = service.request(PHONE).await;

    assert!(matches!(result, Err(OtpError::Generation { .. })));
    assert!(cache.stored(PHONE).is_none());
}

#[tokio::test]
async fn test_verify_without_request_is_not_found() {
    let (service, _) = service_with(123_456);

    assert_eq!(service.verify(PHONE, "123456").await, Err(OtpError::NotFound));
}

#[tokio::test]
async fn test_verify_wrong_code_is_mismatch() {
    let (service, _) = service_with(123_456);
    service.request(PHONE).await.unwrap();

    assert_eq!(service.verify(PHONE, "654321").await, Err(OtpError::Mismatch));
    assert_eq!(service.verify(PHONE, "12345").await, Err(OtpError::Mismatch));
}

#[tokio::test]
async fn test_verify_malformed_stored_value_is_invalid_state() {
    let (service, cache) = service_with(123_456);
    cache.insert_raw(PHONE, "not-a-code");

    assert_eq!(
        service.verify(PHONE, "123456").await,
        Err(OtpError::InvalidState)
    );
}

/// A verified code is not consumed: it stays valid until its TTL elapses.
#[tokio::test]
async fn test_verified_code_can_be_replayed_within_ttl() {
    let (service, cache) = service_with(7);
    service.request(PHONE).await.unwrap();

    assert_eq!(service.verify(PHONE, "000007").await, Ok(true));
    assert_eq!(service.verify(PHONE, "000007").await, Ok(true));
    assert_eq!(cache.stored(PHONE).as_deref(), Some("000007"));
}

#[tokio::test]
async fn test_codes_are_per_phone() {
    let (service, _) = service_with(5);
    service.request(PHONE).await.unwrap();

    assert_eq!(
        service.verify("09987654321", "000005").await,
        Err(OtpError::NotFound)
    );
}

#[test]
fn test_os_generator_produces_six_digits() {
    let generator = OsCodeGenerator;
    for _ in 0..1_000 {
        let code = generator.generate().unwrap();
        assert_eq!(code.as_str().len(), 6);
        assert!(code.as_str().bytes().all(|b| b.is_ascii_digit()));
    }
}

#[test]
fn test_config_from_cache_config() {
    let cache_config = oa_shared::CacheConfig {
        sweep_interval_seconds: 60,
        otp_ttl_seconds: 300,
    };
    let config = OtpServiceConfig::from(&cache_config);
    assert_eq!(config.code_ttl, Duration::from_secs(300));
}
