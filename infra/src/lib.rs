//! # Infrastructure Layer
//!
//! Concrete implementations of the persistence traits defined in
//! `cms_core`, backed by MySQL through SQLx. The API layer wires these
//! repositories into the customer service at startup.

use thiserror::Error;

pub use cms_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{
    DatabasePool, MySqlAddressRepository, MySqlCustomerRepository, MySqlOtpRepository,
    PoolStatistics,
};

/// Errors raised while setting up infrastructure services
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Failed to establish the database connection pool
    #[error("Database connection failed: {0}")]
    Connection(#[from] sqlx::Error),
}
