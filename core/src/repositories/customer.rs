//! Customer repository trait defining the interface for customer persistence.
//!
//! Implementations handle the actual database operations while keeping the
//! abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;

use cms_shared::types::PageQuery;

use crate::domain::entities::{Address, Customer, CustomerStatus, OneTimePassword};
use crate::errors::DomainResult;

/// Repository trait for customer persistence operations
///
/// Lookup misses are reported as `Ok(None)`; the service layer decides
/// whether a miss is a not-found condition. Writes that would violate a
/// uniqueness constraint must fail with `DomainError::AlreadyExists` — the
/// storage-level unique index is the authoritative guard, service-level
/// existence checks only produce friendlier messages.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer together with its addresses and its freshly
    /// issued OTP as one atomic unit: either all rows commit or none do.
    ///
    /// Returns the persisted records with database-assigned identifiers.
    async fn create(
        &self,
        customer: Customer,
        addresses: Vec<Address>,
        otp: OneTimePassword,
    ) -> DomainResult<(Customer, Vec<Address>, OneTimePassword)>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Customer>>;

    async fn find_by_mobile_number(&self, mobile_number: &str) -> DomainResult<Option<Customer>>;

    async fn find_by_email_address(&self, email_address: &str) -> DomainResult<Option<Customer>>;

    async fn find_by_full_name(&self, full_name: &str) -> DomainResult<Option<Customer>>;

    async fn exists_by_mobile_number(&self, mobile_number: &str) -> DomainResult<bool>;

    async fn exists_by_email_address(&self, email_address: &str) -> DomainResult<bool>;

    async fn exists_by_full_name(&self, full_name: &str) -> DomainResult<bool>;

    /// List one page of customers sorted descending by the query's sort
    /// field, together with the total row count.
    async fn list(&self, query: &PageQuery) -> DomainResult<(Vec<Customer>, u64)>;

    /// Replace all mutable fields of an existing customer
    async fn update(&self, customer: Customer) -> DomainResult<Customer>;

    /// Single-field write: mobile number
    async fn update_mobile_by_id(&self, id: i64, new_mobile_number: &str) -> DomainResult<()>;

    /// Single-field write: email address
    async fn update_email_by_id(&self, id: i64, new_email_address: &str) -> DomainResult<()>;

    /// Single-field write: password digest
    async fn update_password_by_id(&self, id: i64, password_hash: &str) -> DomainResult<()>;

    /// Single-field write: lifecycle status (soft delete / activation)
    async fn set_status_by_id(&self, id: i64, status: CustomerStatus) -> DomainResult<()>;

    /// Hard delete: remove the customer row (addresses and OTPs cascade)
    ///
    /// Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: i64) -> DomainResult<bool>;
}
