//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted mobile format: `09` followed by nine digits
pub const PHONE_PATTERN: &str = r"^09\d{9}$";

pub static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN).unwrap());

/// Check if a phone number matches `09XXXXXXXXX`
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for logs (e.g., 091****6789)
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() >= 7 {
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}****{tail}")
    } else {
        String::from("****")
    }
}
