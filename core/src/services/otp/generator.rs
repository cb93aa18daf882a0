//! Code generation backed by the operating system CSPRNG

use rand::{rngs::OsRng, RngCore};

use crate::domain::entities::otp_code::{OtpCode, CODE_SPACE};
use crate::errors::OtpError;

/// Largest multiple of `CODE_SPACE` representable in a `u32`; draws at or
/// above it are rejected so every code is equally likely.
const REJECTION_BOUND: u32 = (u32::MAX / CODE_SPACE) * CODE_SPACE;

/// Source of fresh OTP codes
pub trait CodeGenerator: Send + Sync {
    /// Produce a code uniformly distributed over `000000..=999999`
    fn generate(&self) -> Result<OtpCode, OtpError>;
}

/// Generator drawing from [`OsRng`]
#[derive(Debug, Clone, Copy, Default)]
pub struct OsCodeGenerator;

impl CodeGenerator for OsCodeGenerator {
    fn generate(&self) -> Result<OtpCode, OtpError> {
        let mut bytes = [0u8; 4];
        loop {
            OsRng
                .try_fill_bytes(&mut bytes)
                .map_err(|e| OtpError::Generation {
                    message: e.to_string(),
                })?;
            let value = u32::from_le_bytes(bytes);
            if value < REJECTION_BOUND {
                return OtpCode::from_value(value % CODE_SPACE).ok_or_else(|| {
                    OtpError::Generation {
                        message: format!("value {} out of code space", value),
                    }
                });
            }
        }
    }
}
