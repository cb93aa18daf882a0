//! Business services containing domain logic and use cases.

pub mod auth;
pub mod otp;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::{
    otp_rate_limit_key, AuthService, AuthServiceConfig, RateLimitDecision, RateLimitPolicy,
    RateLimiterTrait,
};
pub use otp::{CacheServiceTrait, CodeGenerator, OsCodeGenerator, OtpService, OtpServiceConfig};
pub use token::{IssuedToken, TokenService};
pub use user::{UserPage, UserService};
