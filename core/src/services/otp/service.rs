//! Main OTP service implementation

use std::sync::Arc;

use oa_shared::utils::mask_phone;

use crate::domain::entities::otp_code::OtpCode;
use crate::errors::OtpError;

use super::config::OtpServiceConfig;
use super::generator::{CodeGenerator, OsCodeGenerator};
use super::traits::CacheServiceTrait;

/// OTP service issuing and verifying codes per phone number
///
/// A phone is either without a code or has one pending. Requesting again
/// overwrites the pending code; verifying leaves it in place until the TTL
/// elapses, so a correct code can be verified repeatedly within that time.
pub struct OtpService<C: CacheServiceTrait, G: CodeGenerator = OsCodeGenerator> {
    /// Expiring store holding the pending codes
    cache_service: Arc<C>,
    /// Secure code source
    generator: G,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<C: CacheServiceTrait> OtpService<C, OsCodeGenerator> {
    /// Create a new OTP service drawing codes from the OS CSPRNG
    pub fn new(cache_service: Arc<C>, config: OtpServiceConfig) -> Self {
        Self::with_generator(cache_service, OsCodeGenerator, config)
    }
}

impl<C: CacheServiceTrait, G: CodeGenerator> OtpService<C, G> {
    /// Create a new OTP service with a custom code generator
    pub fn with_generator(cache_service: Arc<C>, generator: G, config: OtpServiceConfig) -> Self {
        Self {
            cache_service,
            generator,
            config,
        }
    }

    /// Service configuration
    pub fn config(&self) -> &OtpServiceConfig {
        &self.config
    }

    /// Issue a fresh code for `phone`
    ///
    /// The caller is responsible for admission control. Fails only when the
    /// secure random source is unavailable.
    pub async fn request(&self, phone: &str) -> Result<(), OtpError> {
        let code = self.generator.generate().map_err(|e| {
            tracing::error!(
                phone = %mask_phone(phone),
                error = %e,
                event = "otp_generation_failed",
                "Failed to generate verification code"
            );
            e
        })?;

        self.cache_service
            .store_code(phone, code.as_str(), self.config.code_ttl)
            .await;

        tracing::info!(
            phone = %mask_phone(phone),
            ttl_seconds = self.config.code_ttl.as_secs(),
            event = "otp_generated",
            "Generated new verification code"
        );
        tracing::debug!(phone = %mask_phone(phone), code = %code, "Issued verification code");

        Ok(())
    }

    /// Verify `code` against the pending code for `phone`
    ///
    /// Returns `Ok(true)` on a match; every failure is reported as an
    /// `OtpError` rather than `Ok(false)`.
    pub async fn verify(&self, phone: &str, code: &str) -> Result<bool, OtpError> {
        let stored = match self.cache_service.get_code(phone).await {
            Some(stored) => stored,
            None => {
                tracing::info!(
                    phone = %mask_phone(phone),
                    event = "otp_not_found",
                    "No active verification code"
                );
                return Err(OtpError::NotFound);
            }
        };

        let Some(expected) = OtpCode::parse(&stored) else {
            tracing::error!(
                phone = %mask_phone(phone),
                event = "otp_invalid_state",
                "Stored verification code is malformed"
            );
            return Err(OtpError::InvalidState);
        };

        if !expected.matches(code) {
            tracing::warn!(
                phone = %mask_phone(phone),
                event = "otp_mismatch",
                "Verification code does not match"
            );
            return Err(OtpError::Mismatch);
        }

        tracing::info!(
            phone = %mask_phone(phone),
            event = "otp_verified",
            "Verification code verified"
        );
        Ok(true)
    }
}
