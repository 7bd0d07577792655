//! Configuration module
//!
//! All configuration is environment-driven:
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server configuration

pub mod database;
pub mod environment;
pub mod server;

pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;
