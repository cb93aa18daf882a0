//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use oa_core::domain::entities::user::{User, UserFilter};
use oa_core::errors::DomainError;
use oa_core::repositories::UserRepository;
use oa_shared::Pagination;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        phone_number VARCHAR(20) NOT NULL,
        created_at TIMESTAMP(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
        UNIQUE KEY uk_users_phone_number (phone_number)
    )
"#;

/// MySQL implementation of UserRepository
///
/// Registration relies on the unique phone index (`INSERT IGNORE`), so
/// concurrent registrations of one phone create a single row.
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create the `users` table when missing
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| persistence("create users table", e))?;
        Ok(())
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| persistence("read id", e))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| persistence("read phone_number", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| persistence("read created_at", e))?,
        })
    }
}

fn persistence(action: &str, error: sqlx::Error) -> DomainError {
    DomainError::Persistence {
        message: format!("Failed to {}: {}", action, error),
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn register(&self, phone_number: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("INSERT IGNORE INTO users (phone_number, created_at) VALUES (?, ?)")
            .bind(phone_number)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| persistence("register user", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, phone_number, created_at FROM users WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| persistence("find user by id", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT id, phone_number, created_at FROM users WHERE phone_number = ? LIMIT 1",
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| persistence("find user by phone", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn list(
        &self,
        filter: &UserFilter,
        pagination: Pagination,
    ) -> Result<Vec<User>, DomainError> {
        let query = r#"
            SELECT id, phone_number, created_at
            FROM users
            WHERE (? IS NULL OR phone_number = ?)
            ORDER BY id
            LIMIT ? OFFSET ?
        "#;

        let rows = sqlx::query(query)
            .bind(filter.phone_number.as_deref())
            .bind(filter.phone_number.as_deref())
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| persistence("list users", e))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn count(&self, filter: &UserFilter) -> Result<u64, DomainError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total FROM users WHERE (? IS NULL OR phone_number = ?)",
        )
        .bind(filter.phone_number.as_deref())
        .bind(filter.phone_number.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| persistence("count users", e))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| persistence("read user count", e))?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn health_check(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| persistence("ping database", e))?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "mysql"
    }
}
