use oa_core::domain::entities::user::User;
use serde::{Deserialize, Serialize};

/// Public view of a registered user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub phone_number: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            phone_number: user.phone_number,
        }
    }
}

/// Query string of `GET /api/v1/users`
///
/// Kept as raw strings so malformed paging values fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub phone_number: Option<String>,
}
