//! Customer management service.
//!
//! Orchestrates the full record lifecycle: registration with generated
//! credentials, lookups, field updates, password resets, OTP activation
//! and both soft and hard deletion.

mod service;
mod types;

pub use service::CustomerService;
pub use types::{CreateCustomerInput, CustomerRecord, NewAddress, UpdateCustomerInput};

#[cfg(test)]
mod tests;
