//! OTP code storage backed by the expiring store

use std::time::Duration;

use async_trait::async_trait;
use oa_core::services::otp::CacheServiceTrait;
use oa_shared::CacheConfig;

use super::expiring_store::ExpiringStore;

/// Expiring store dedicated to OTP codes, keyed by phone number
pub struct OtpStore {
    codes: ExpiringStore<String>,
}

impl OtpStore {
    /// Create an OTP store whose sweep runs every `sweep_interval`
    pub fn new(sweep_interval: Duration) -> Self {
        Self {
            codes: ExpiringStore::new(sweep_interval),
        }
    }

    /// Create an OTP store from cache configuration
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(Duration::from_secs(config.sweep_interval_seconds.max(1)))
    }

    /// Underlying store
    pub fn store(&self) -> &ExpiringStore<String> {
        &self.codes
    }

    /// Stop the background sweep and wait for it
    pub async fn shutdown(&self) {
        self.codes.shutdown().await;
        tracing::info!("OTP store sweep stopped");
    }
}

#[async_trait]
impl CacheServiceTrait for OtpStore {
    async fn store_code(&self, phone: &str, code: &str, ttl: Duration) {
        self.codes.set(phone, code.to_string(), ttl).await;
    }

    async fn get_code(&self, phone: &str) -> Option<String> {
        self.codes.get(phone).await
    }

    async fn clear_code(&self, phone: &str) {
        self.codes.delete(phone).await;
    }
}
