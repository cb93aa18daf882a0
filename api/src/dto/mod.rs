pub mod auth;
pub mod user;

pub use auth::{RequestOtpRequest, VerifyOtpRequest};
pub use user::{UserListQuery, UserResponse};
