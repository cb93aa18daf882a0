//! Type definitions module
//!
//! - `pagination` - Pagination for list endpoints
//! - `response` - API response envelope and health reports

pub mod pagination;
pub mod response;

pub use pagination::{PaginatedResponse, Pagination, PaginationMeta};
pub use response::{BasicResponse, HealthResponse, HealthStatus};
