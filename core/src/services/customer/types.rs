//! Input and output types for the customer service.

use crate::domain::entities::{Address, Customer};

/// Address payload for customer registration
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub address_type: Option<String>,
    pub pincode: i64,
}

impl From<NewAddress> for Address {
    fn from(input: NewAddress) -> Self {
        Address::new(
            input.street,
            input.city,
            input.state,
            input.country,
            input.address_type,
            input.pincode,
        )
    }
}

/// Payload for registering a new customer
///
/// No password field: credentials are generated server-side at
/// registration time and only the OTP is handed back to the caller.
#[derive(Debug, Clone)]
pub struct CreateCustomerInput {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub age: i32,
    pub mobile_number: String,
    pub email_address: String,
    pub addresses: Vec<NewAddress>,
}

/// Payload for a full update of an existing customer
///
/// The record is located by `mobile_number`; all other fields replace the
/// stored values. Addresses are not touched by a full update.
#[derive(Debug, Clone)]
pub struct UpdateCustomerInput {
    pub mobile_number: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub age: i32,
    pub email_address: String,
}

/// A customer together with its owned rows, as returned by the service
#[derive(Debug, Clone)]
pub struct CustomerRecord {
    pub customer: Customer,
    pub addresses: Vec<Address>,
    /// Plaintext OTP code, present only on the response to a registration
    pub otp: Option<String>,
}

impl CustomerRecord {
    pub fn new(customer: Customer, addresses: Vec<Address>) -> Self {
        Self {
            customer,
            addresses,
            otp: None,
        }
    }

    pub fn with_otp(customer: Customer, addresses: Vec<Address>, otp: String) -> Self {
        Self {
            customer,
            addresses,
            otp: Some(otp),
        }
    }
}
