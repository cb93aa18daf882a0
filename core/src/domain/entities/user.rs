//! User entity representing a registered phone number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity created the first time a phone number verifies successfully
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,

    /// Phone number in `09XXXXXXXXX` form, unique per user
    pub phone_number: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(id: i64, phone_number: impl Into<String>) -> Self {
        Self {
            id,
            phone_number: phone_number.into(),
            created_at: Utc::now(),
        }
    }
}

/// Filter applied when listing users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Exact phone number match
    pub phone_number: Option<String>,
}

impl UserFilter {
    /// Filter by exact phone number; blank input means no filter
    pub fn by_phone(phone_number: Option<&str>) -> Self {
        Self {
            phone_number: phone_number
                .map(str::trim)
                .filter(|phone| !phone.is_empty())
                .map(str::to_string),
        }
    }

    /// Check whether a user passes this filter
    pub fn matches(&self, user: &User) -> bool {
        self.phone_number
            .as_deref()
            .map_or(true, |phone| user.phone_number == phone)
    }
}
