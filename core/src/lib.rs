//! # Customer Management Core
//!
//! Core business logic and domain layer for the customer management backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Address, Customer, CustomerStatus, OneTimePassword};
pub use errors::{DomainError, DomainResult};
pub use repositories::{AddressRepository, CustomerRepository, InMemoryStore, OtpRepository};
pub use services::{CredentialGenerator, CustomerService};
