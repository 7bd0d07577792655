//! Customer entity representing a registered customer record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a customer account
///
/// Customers are created `Inactive` and become `Active` once a matching
/// OTP is presented. Soft deletion flips the status back to `Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl CustomerStatus {
    /// Storage representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "ACTIVE",
            CustomerStatus::Inactive => "INACTIVE",
        }
    }

    /// Parse the storage representation; unknown values are treated as inactive
    pub fn from_str_or_inactive(value: &str) -> Self {
        match value {
            "ACTIVE" => CustomerStatus::Active,
            _ => CustomerStatus::Inactive,
        }
    }
}

/// Customer entity
///
/// `mobile_number`, `email_address` and `full_name` are each unique across
/// all customers; the storage layer's unique indexes enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Database-assigned identifier (0 until persisted)
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    /// Unique display name
    pub full_name: String,

    pub age: i32,

    /// Unique contact key
    pub mobile_number: String,

    /// Unique contact key
    pub email_address: String,

    /// Bcrypt digest of the customer's password; never exposed on the wire
    pub password_hash: String,

    pub status: CustomerStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new customer in the `Inactive` state
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        full_name: String,
        age: i32,
        mobile_number: String,
        email_address: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            first_name,
            last_name,
            full_name,
            age,
            mobile_number,
            email_address,
            password_hash,
            status: CustomerStatus::Inactive,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the customer as active (successful OTP activation)
    pub fn activate(&mut self) {
        self.status = CustomerStatus::Active;
        self.updated_at = Utc::now();
    }

    /// Marks the customer as inactive (soft delete)
    pub fn deactivate(&mut self) {
        self.status = CustomerStatus::Inactive;
        self.updated_at = Utc::now();
    }

    /// Checks if the customer account is active
    pub fn is_active(&self) -> bool {
        self.status == CustomerStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customer() -> Customer {
        Customer::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            "Ada Lovelace".to_string(),
            36,
            "9999999999".to_string(),
            "ada@example.com".to_string(),
            "$2b$12$digest".to_string(),
        )
    }

    #[test]
    fn test_new_customer_starts_inactive() {
        let customer = sample_customer();
        assert_eq!(customer.id, 0);
        assert_eq!(customer.status, CustomerStatus::Inactive);
        assert!(!customer.is_active());
        assert_eq!(customer.created_at, customer.updated_at);
    }

    #[test]
    fn test_activate_and_deactivate() {
        let mut customer = sample_customer();

        customer.activate();
        assert!(customer.is_active());

        customer.deactivate();
        assert_eq!(customer.status, CustomerStatus::Inactive);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&CustomerStatus::Inactive).unwrap();
        assert_eq!(json, "\"INACTIVE\"");

        let json = serde_json::to_string(&CustomerStatus::Active).unwrap();
        assert_eq!(json, "\"ACTIVE\"");
    }

    #[test]
    fn test_status_storage_round_trip() {
        assert_eq!(CustomerStatus::from_str_or_inactive("ACTIVE"), CustomerStatus::Active);
        assert_eq!(CustomerStatus::from_str_or_inactive("INACTIVE"), CustomerStatus::Inactive);
        assert_eq!(CustomerStatus::from_str_or_inactive("garbage"), CustomerStatus::Inactive);
        assert_eq!(CustomerStatus::Active.as_str(), "ACTIVE");
    }
}
