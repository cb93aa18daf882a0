//! Main authentication service implementation

use std::sync::Arc;

use oa_shared::utils::{is_valid_phone, mask_phone};

use crate::domain::value_objects::{AuthResponse, OtpRequestResult};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::otp::{CacheServiceTrait, CodeGenerator, OsCodeGenerator, OtpService};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::rate_limiter::{otp_rate_limit_key, RateLimitDecision, RateLimiterTrait};

/// Authentication service for the complete OTP login flow
pub struct AuthService<U, C, R, G = OsCodeGenerator>
where
    U: UserRepository,
    C: CacheServiceTrait,
    R: RateLimiterTrait,
    G: CodeGenerator,
{
    /// User repository for registration
    user_repository: Arc<U>,
    /// OTP service for code handling
    otp_service: Arc<OtpService<C, G>>,
    /// Rate limiter for OTP requests
    rate_limiter: Arc<R>,
    /// Token service for bearer tokens
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, C, R, G> AuthService<U, C, R, G>
where
    U: UserRepository,
    C: CacheServiceTrait,
    R: RateLimiterTrait,
    G: CodeGenerator,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        otp_service: Arc<OtpService<C, G>>,
        rate_limiter: Arc<R>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            otp_service,
            rate_limiter,
            token_service,
            config,
        }
    }

    /// Start an OTP challenge for `phone`
    ///
    /// 1. Validates the `09XXXXXXXXX` phone format
    /// 2. Checks the per-phone sliding window (`otp:<phone>`)
    /// 3. Issues and stores a fresh code
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidPhoneFormat` - malformed phone number
    /// * `AuthError::RateLimitExceeded` - too many recent requests
    /// * `OtpError::Generation` - secure random source failed
    pub async fn request_otp(&self, phone: &str) -> DomainResult<OtpRequestResult> {
        Self::validate_phone(phone)?;

        let key = otp_rate_limit_key(phone);
        if let RateLimitDecision::Limited {
            retry_after_seconds,
        } = self
            .rate_limiter
            .check(&key, self.config.otp_rate_limit)
            .await
        {
            tracing::warn!(
                phone = %mask_phone(phone),
                retry_after_seconds,
                event = "rate_limit_exceeded",
                "OTP request rate limit exceeded"
            );
            return Err(AuthError::RateLimitExceeded {
                retry_after_seconds,
            }
            .into());
        }

        self.otp_service.request(phone).await?;

        Ok(OtpRequestResult {
            expires_in: self.otp_service.config().code_ttl.as_secs(),
        })
    }

    /// Complete an OTP challenge and issue a bearer token
    ///
    /// On a matching code the phone number is registered (idempotently) and a
    /// signed token is returned. The code stays valid until its TTL elapses.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidPhoneFormat` - malformed phone number
    /// * `OtpError::NotFound` / `InvalidState` / `Mismatch` - verification failed
    /// * `DomainError::Persistence` - user registration failed
    /// * `TokenError::Config` / `Signing` - token could not be issued
    pub async fn verify_otp(&self, phone: &str, code: &str) -> DomainResult<AuthResponse> {
        Self::validate_phone(phone)?;

        self.otp_service.verify(phone, code).await?;

        let created = self
            .user_repository
            .register(phone)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %mask_phone(phone),
                    error = %e,
                    event = "user_registration_failed",
                    "Failed to register user"
                );
                match e {
                    DomainError::Persistence { .. } => e,
                    other => DomainError::Persistence {
                        message: other.to_string(),
                    },
                }
            })?;

        if created {
            tracing::info!(
                phone = %mask_phone(phone),
                event = "user_registered",
                "Registered new user"
            );
        }

        let issued = self.token_service.generate_token(phone).map_err(|e| {
            tracing::error!(
                phone = %mask_phone(phone),
                error = %e,
                event = "token_generation_failed",
                "Failed to issue access token"
            );
            e
        })?;

        tracing::info!(
            phone = %mask_phone(phone),
            is_new_user = created,
            event = "login_success",
            "OTP login completed"
        );

        Ok(AuthResponse::bearer(
            issued.access_token,
            issued.claims.lifetime_seconds(),
            created,
        ))
    }

    fn validate_phone(phone: &str) -> DomainResult<()> {
        if is_valid_phone(phone) {
            Ok(())
        } else {
            Err(AuthError::InvalidPhoneFormat {
                phone: mask_phone(phone),
            }
            .into())
        }
    }
}
