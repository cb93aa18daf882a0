//! One-time passcode value type.

use std::fmt;

use constant_time_eq::constant_time_eq;

/// Number of digits in a code
pub const CODE_LENGTH: usize = 6;

/// Codes are drawn uniformly from `0..CODE_SPACE`
pub const CODE_SPACE: u32 = 1_000_000;

/// Lifetime of a freshly issued code (2 minutes)
pub const DEFAULT_OTP_TTL_SECONDS: u64 = 120;

/// A zero-padded six digit code such as `"000042"`
///
/// `Debug` redacts the digits so codes never leak through `{:?}` logging.
#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    /// Build a code from a value in `0..CODE_SPACE`
    pub fn from_value(value: u32) -> Option<Self> {
        (value < CODE_SPACE).then(|| Self(format!("{:0width$}", value, width = CODE_LENGTH)))
    }

    /// Parse a stored or submitted code; exactly six ASCII digits
    pub fn parse(raw: &str) -> Option<Self> {
        (raw.len() == CODE_LENGTH && raw.bytes().all(|b| b.is_ascii_digit()))
            .then(|| Self(raw.to_string()))
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constant-time comparison against a submitted code
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.len() == candidate.len() && constant_time_eq(self.0.as_bytes(), candidate.as_bytes())
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpCode(******)")
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
