//! One-time password entity used for account activation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of a generated OTP code
pub const OTP_LENGTH: usize = 6;

/// One-time password issued to a customer at creation time
///
/// Codes carry no expiry and no consumed flag: every code ever issued to a
/// customer remains a valid activation candidate. `created_at` is stored so
/// an expiry policy can be layered on later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimePassword {
    /// Database-assigned identifier (0 until persisted)
    pub id: i64,

    /// The 6-digit numeric code
    pub code: String,

    pub created_at: DateTime<Utc>,

    /// Owning customer (0 until the customer is persisted)
    pub customer_id: i64,
}

impl OneTimePassword {
    /// Creates a new OTP record around an already-generated code
    pub fn new(code: String) -> Self {
        Self {
            id: 0,
            code,
            created_at: Utc::now(),
            customer_id: 0,
        }
    }

    /// Checks whether a candidate code matches this OTP exactly
    pub fn matches(&self, candidate: &str) -> bool {
        self.code == candidate
    }
}
