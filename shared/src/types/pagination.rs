//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Default page size when none (or an invalid one) is requested
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size a client may request
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: u32,

    /// Number of items per page
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Create a pagination, replacing out-of-range values with defaults
    pub fn new(page: u32, page_size: u32) -> Self {
        let defaults = Self::default();
        Self {
            page: if page == 0 { defaults.page } else { page },
            page_size: if page_size == 0 || page_size > MAX_PAGE_SIZE {
                defaults.page_size
            } else {
                page_size
            },
        }
    }

    /// Parse raw query-string values; anything unparseable falls back to the default
    pub fn from_query(page: Option<&str>, page_size: Option<&str>) -> Self {
        let page = page.and_then(|p| p.trim().parse().ok()).unwrap_or(0);
        let page_size = page_size.and_then(|p| p.trim().parse().ok()).unwrap_or(0);
        Self::new(page, page_size)
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

/// Pagination metadata returned alongside a page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Build metadata, including absolute links relative to `base_url`
    pub fn new(pagination: Pagination, total: u64, base_url: &str) -> Self {
        let page_size = u64::from(pagination.page_size.max(1));
        let total_pages = total.div_ceil(page_size);
        let has_next = u64::from(pagination.page) < total_pages;
        let has_prev = pagination.page > 1;

        Self {
            page: pagination.page,
            page_size: pagination.page_size,
            total,
            total_pages,
            next_page: has_next
                .then(|| page_url(base_url, pagination.page + 1, pagination.page_size)),
            prev_page: has_prev
                .then(|| page_url(base_url, pagination.page - 1, pagination.page_size)),
            has_next,
            has_prev,
        }
    }
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The actual data items
    pub data: Vec<T>,

    /// Page metadata
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(data: Vec<T>, pagination: Pagination, total: u64, base_url: &str) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(pagination, total, base_url),
        }
    }
}

fn page_url(base_url: &str, page: u32, page_size: u32) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}page={page}&page_size={page_size}")
}
