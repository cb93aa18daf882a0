//! Storage seam for issued codes

use std::time::Duration;

use async_trait::async_trait;

/// Trait for the expiring code store
///
/// Values are kept as the raw strings that were written; the OTP service
/// validates their shape on read.
#[async_trait]
pub trait CacheServiceTrait: Send + Sync {
    /// Store a code for `phone`, replacing any previous one
    async fn store_code(&self, phone: &str, code: &str, ttl: Duration);

    /// Fetch the live code for `phone`; expired entries are reported as absent
    async fn get_code(&self, phone: &str) -> Option<String>;

    /// Remove any code stored for `phone`
    async fn clear_code(&self, phone: &str);
}
