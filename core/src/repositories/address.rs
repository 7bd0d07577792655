//! Address repository trait.
//!
//! Addresses are written only as part of customer creation (see
//! [`crate::repositories::CustomerRepository::create`]); this trait covers
//! the read side.

use async_trait::async_trait;

use crate::domain::entities::Address;
use crate::errors::DomainResult;

/// Repository trait for address lookups
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// All addresses owned by a customer
    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<Address>>;
}
