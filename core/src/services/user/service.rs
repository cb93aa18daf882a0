//! User query service implementation

use std::sync::Arc;

use oa_shared::Pagination;

use crate::domain::entities::user::{User, UserFilter};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

/// One page of users plus the total number of matches
#[derive(Debug, Clone)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: u64,
    pub pagination: Pagination,
}

/// Read-side service over the user repository
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Create a new user service
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Fetch a user by id
    ///
    /// # Errors
    ///
    /// `DomainError::NotFound` when no user has this id.
    pub async fn get_user(&self, id: i64) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await
            .map_err(Self::persistence)?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("user {}", id),
            })
    }

    /// List users matching `filter`, one page at a time
    pub async fn list_users(
        &self,
        filter: &UserFilter,
        pagination: Pagination,
    ) -> DomainResult<UserPage> {
        let total = self
            .user_repository
            .count(filter)
            .await
            .map_err(Self::persistence)?;
        let users = self
            .user_repository
            .list(filter, pagination)
            .await
            .map_err(Self::persistence)?;

        tracing::debug!(
            total,
            returned = users.len(),
            page = pagination.page,
            "Listed users"
        );

        Ok(UserPage {
            users,
            total,
            pagination,
        })
    }

    /// Probe the user store
    pub async fn health_check(&self) -> DomainResult<()> {
        self.user_repository.health_check().await
    }

    /// Name of the backing store
    pub fn backend(&self) -> &'static str {
        self.user_repository.backend()
    }

    fn persistence(error: DomainError) -> DomainError {
        match error {
            DomainError::Persistence { .. } => error,
            other => DomainError::Persistence {
                message: other.to_string(),
            },
        }
    }
}
