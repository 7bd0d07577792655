//! Repository traits for the persistence gateway, plus an in-memory
//! implementation used by tests.

pub mod address;
pub mod customer;
pub mod mock;
pub mod otp;

pub use address::AddressRepository;
pub use customer::CustomerRepository;
pub use mock::InMemoryStore;
pub use otp::OtpRepository;
