//! In-memory implementation of the UserRepository trait.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use oa_core::domain::entities::user::{User, UserFilter};
use oa_core::errors::DomainError;
use oa_core::repositories::UserRepository;
use oa_shared::Pagination;

#[derive(Default)]
struct Users {
    by_id: BTreeMap<i64, User>,
    by_phone: HashMap<String, i64>,
    last_id: i64,
}

/// Users held in process memory, ordered by id
///
/// Registration takes the write lock for the whole check-and-insert, so
/// concurrent registrations of one phone create a single user.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Users>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn register(&self, phone_number: &str) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        if users.by_phone.contains_key(phone_number) {
            return Ok(false);
        }

        users.last_id += 1;
        let user = User::new(users.last_id, phone_number);
        users.by_phone.insert(user.phone_number.clone(), user.id);
        users.by_id.insert(user.id, user);
        Ok(true)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.by_id.get(&id).cloned())
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .by_phone
            .get(phone_number)
            .and_then(|id| users.by_id.get(id))
            .cloned())
    }

    async fn list(
        &self,
        filter: &UserFilter,
        pagination: Pagination,
    ) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(pagination.limit()).unwrap_or(usize::MAX);

        Ok(users
            .by_id
            .values()
            .filter(|user| filter.matches(user))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &UserFilter) -> Result<u64, DomainError> {
        let users = self.users.read().await;
        Ok(users.by_id.values().filter(|user| filter.matches(user)).count() as u64)
    }

    async fn health_check(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
