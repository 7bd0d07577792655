//! Address entity owned by a customer.

use serde::{Deserialize, Serialize};

/// A customer's address
///
/// Addresses cannot exist without an owning customer; deleting the customer
/// removes its addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Database-assigned identifier (0 until persisted)
    pub id: i64,

    pub street: String,

    pub city: String,

    pub state: String,

    pub country: String,

    /// Optional tag such as "HOME" or "OFFICE"
    pub address_type: Option<String>,

    /// Postal code, bounded to [10000, 9999999]
    pub pincode: i64,

    /// Owning customer (0 until the customer is persisted)
    pub customer_id: i64,
}

impl Address {
    /// Creates a new address; the owning customer id is assigned at persist time
    pub fn new(
        street: String,
        city: String,
        state: String,
        country: String,
        address_type: Option<String>,
        pincode: i64,
    ) -> Self {
        Self {
            id: 0,
            street,
            city,
            state,
            country,
            address_type,
            pincode,
            customer_id: 0,
        }
    }
}
