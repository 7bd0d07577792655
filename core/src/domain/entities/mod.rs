//! Domain entities

pub mod address;
pub mod customer;
pub mod otp;

pub use address::Address;
pub use customer::{Customer, CustomerStatus};
pub use otp::OneTimePassword;
