//! OTP repository trait.
//!
//! OTP rows are written only as part of customer creation (see
//! [`crate::repositories::CustomerRepository::create`]); this trait covers
//! the read side used by the activation flow.

use async_trait::async_trait;

use crate::domain::entities::OneTimePassword;
use crate::errors::DomainResult;

/// Repository trait for OTP lookups
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// All OTP codes ever issued to a customer, activation candidates all
    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<OneTimePassword>>;
}
