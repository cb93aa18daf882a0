//! Domain entities representing core business objects.

pub mod otp_code;
pub mod token;
pub mod user;


// Re-export commonly used types
pub use otp_code::{OtpCode, CODE_LENGTH, CODE_SPACE, DEFAULT_OTP_TTL_SECONDS};
pub use token::{subject_for, Claims};
pub use user::{User, UserFilter};
