//! User repository trait defining the interface for user data persistence.
//!
//! The authentication flow only needs [`UserRepository::register`]; the
//! lookup, listing and health operations back the user endpoints.

use async_trait::async_trait;
use oa_shared::Pagination;

use crate::domain::entities::user::{User, UserFilter};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Ensure a user exists for `phone_number`
    ///
    /// Idempotent: returns `true` only when this call created the record.
    /// Concurrent calls for the same phone create at most one user.
    async fn register(&self, phone_number: &str) -> Result<bool, DomainError>;

    /// Find a user by identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a user by phone number
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError>;

    /// List users matching `filter`, ordered by id, one page at a time
    async fn list(
        &self,
        filter: &UserFilter,
        pagination: Pagination,
    ) -> Result<Vec<User>, DomainError>;

    /// Count users matching `filter`
    async fn count(&self, filter: &UserFilter) -> Result<u64, DomainError>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> Result<(), DomainError>;

    /// Short backend name for health reports
    fn backend(&self) -> &'static str;
}
