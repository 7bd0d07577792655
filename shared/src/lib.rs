//! Shared utilities and common types for the customer management server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Pagination types for list endpoints
//! - Validation helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, Environment, ServerConfig};
pub use types::{PageQuery, PageResponse};
pub use utils::validation;
