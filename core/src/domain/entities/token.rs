//! Token claims for signed bearer tokens.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Pseudonymous subject, see [`subject_for`]
    pub sub: String,

    /// Issued at (unix seconds)
    pub iat: i64,

    /// Expiration (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Build claims for `phone` issued at `iat` and valid for `lifetime_seconds`
    ///
    /// Returns `None` when the expiry does not fit in an `i64`.
    pub fn new(phone: &str, iat: i64, lifetime_seconds: i64) -> Option<Self> {
        let exp = iat.checked_add(lifetime_seconds)?;
        Some(Self {
            sub: subject_for(phone, iat),
            iat,
            exp,
        })
    }

    /// Lifetime encoded in the claims
    pub fn lifetime_seconds(&self) -> i64 {
        self.exp - self.iat
    }
}

/// `hex(sha256(phone || decimal(iat)))`
///
/// The raw phone number never appears in the token, and two tokens issued in
/// different seconds for the same phone carry unlinkable subjects.
pub fn subject_for(phone: &str, iat: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(phone.as_bytes());
    hasher.update(iat.to_string().as_bytes());
    hex::encode(hasher.finalize())
}
