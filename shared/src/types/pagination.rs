//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Pagination parameters for list endpoints
///
/// Pages are 0-indexed; results are sorted descending by `sort_by`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Page number (0-indexed)
    #[serde(default)]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_size")]
    pub size: u32,

    /// Field to sort results by (descending order)
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_size(),
            sort_by: default_sort_by(),
        }
    }
}

impl PageQuery {
    /// Create a new page query with custom values
    pub fn new(page: u32, size: u32, sort_by: impl Into<String>) -> Self {
        Self {
            page,
            size: size.clamp(MIN_SIZE, MAX_SIZE),
            sort_by: sort_by.into(),
        }
    }

    /// Validate and sanitize pagination parameters
    pub fn validate(mut self) -> Self {
        self.size = self.size.clamp(MIN_SIZE, MAX_SIZE);
        if self.sort_by.trim().is_empty() {
            self.sort_by = default_sort_by();
        }
        self
    }

    /// Calculate the offset for database queries
    ///
    /// Widened to `u64` so adversarially large `page` values cannot wrap.
    pub fn offset(&self) -> u64 {
        self.page as u64 * self.size as u64
    }

    /// Calculate offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        self.offset() as i64
    }

    /// Calculate limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        self.size as i64
    }
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// The actual data items
    pub data: Vec<T>,

    /// Current page number (0-indexed)
    pub page: u32,

    /// Items per page
    pub size: u32,

    /// Total number of items
    pub total: u64,

    /// Total number of pages
    pub total_pages: u32,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response
    pub fn new(data: Vec<T>, query: &PageQuery, total: u64) -> Self {
        Self {
            data,
            page: query.page,
            size: query.size,
            total,
            total_pages: Self::calculate_total_pages(total, query.size),
        }
    }

    fn calculate_total_pages(total: u64, size: u32) -> u32 {
        if total == 0 || size == 0 {
            return 0;
        }
        ((total + size as u64 - 1) / size as u64) as u32
    }

    /// Transform the data items using a function
    pub fn map<U, F>(self, f: F) -> PageResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PageResponse {
            data: self.data.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
            total_pages: self.total_pages,
        }
    }

    /// Get the number of items in this page
    pub fn count(&self) -> usize {
        self.data.len()
    }
}

// Constants
const DEFAULT_SIZE: u32 = 20;
const MIN_SIZE: u32 = 1;
const MAX_SIZE: u32 = 100;

fn default_size() -> u32 {
    DEFAULT_SIZE
}

fn default_sort_by() -> String {
    String::from("createdDate")
}
