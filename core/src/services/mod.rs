//! Business services

pub mod credentials;
pub mod customer;

pub use credentials::{hash_password, verify_password, CredentialGenerator};
pub use customer::CustomerService;
