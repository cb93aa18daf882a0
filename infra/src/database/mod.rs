//! Database module - user repository implementations
//!
//! - `memory`: process-local users, used when no database URL is configured
//! - `mysql`: MySQL persistence using SQLx (feature `mysql`)

pub mod memory;

#[cfg(feature = "mysql")]
pub mod connection;
#[cfg(feature = "mysql")]
pub mod mysql;

// Re-export commonly used types
#[cfg(feature = "mysql")]
pub use connection::DatabasePool;
pub use memory::InMemoryUserRepository;
#[cfg(feature = "mysql")]
pub use mysql::MySqlUserRepository;
