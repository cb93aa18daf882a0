//! Main token service implementation

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use oa_shared::JwtConfig;

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

/// A signed token together with the claims it carries
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact JWS serialization
    pub access_token: String,
    /// Claims embedded in the token
    pub claims: Claims,
}

/// Service issuing HS256 bearer tokens
///
/// The secret and lifetime are validated when a token is issued, so a
/// misconfigured server starts but fails the first verification with a
/// configuration error.
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Configured access token lifetime
    ///
    /// # Errors
    ///
    /// `TokenError::Config` when the lifetime is missing, malformed or
    /// shorter than one second.
    pub fn access_lifetime(&self) -> Result<Duration, TokenError> {
        let lifetime = self
            .config
            .access_lifetime()
            .map_err(|e| TokenError::Config {
                message: format!(
                    "invalid access token lifetime {:?}: {}",
                    self.config.access_expiry, e
                ),
            })?;

        if lifetime.as_secs() == 0 {
            return Err(TokenError::Config {
                message: format!(
                    "access token lifetime {:?} is shorter than one second",
                    self.config.access_expiry
                ),
            });
        }
        Ok(lifetime)
    }

    /// Issue a token for `phone` at the current second
    pub fn generate_token(&self, phone: &str) -> Result<IssuedToken, TokenError> {
        self.generate_token_at(phone, Utc::now().timestamp())
    }

    /// Issue a token for `phone` as if issued at `iat` (unix seconds)
    pub fn generate_token_at(&self, phone: &str, iat: i64) -> Result<IssuedToken, TokenError> {
        let lifetime = self.access_lifetime()?;
        let lifetime_seconds = i64::try_from(lifetime.as_secs()).map_err(|_| TokenError::Config {
            message: "access token lifetime is too large".to_string(),
        })?;

        if !self.config.has_secret() {
            return Err(TokenError::Signing {
                message: "signing secret is empty".to_string(),
            });
        }

        let claims = Claims::new(phone, iat, lifetime_seconds).ok_or_else(|| TokenError::Config {
            message: format!(
                "access token lifetime {:?} overflows the expiry timestamp",
                self.config.access_expiry
            ),
        })?;
        let access_token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )
        .map_err(|e| TokenError::Signing {
            message: e.to_string(),
        })?;

        tracing::debug!(
            subject = %claims.sub,
            exp = claims.exp,
            event = "token_issued",
            "Issued access token"
        );

        Ok(IssuedToken {
            access_token,
            claims,
        })
    }

    /// Verify a token's signature and expiry and return its claims
    pub fn decode_token(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| TokenError::Invalid {
            message: e.to_string(),
        })
    }
}
