//! Customer request and response DTOs.
//!
//! The wire format is camelCase throughout. Responses never carry the
//! password digest; the plaintext OTP appears only on the registration
//! response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use cms_core::domain::entities::{Address, CustomerStatus};
use cms_core::services::customer::{
    CreateCustomerInput, CustomerRecord, NewAddress, UpdateCustomerInput,
};

/// Address payload inside a registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,

    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,

    #[serde(default)]
    pub address_type: Option<String>,

    #[validate(range(
        min = 10000,
        max = 9999999,
        message = "Pincode must be between 10000 and 9999999"
    ))]
    pub pincode: i64,
}

impl From<AddressRequest> for NewAddress {
    fn from(request: AddressRequest) -> Self {
        NewAddress {
            street: request.street,
            city: request.city,
            state: request.state,
            country: request.country,
            address_type: request.address_type,
            pincode: request.pincode,
        }
    }
}

/// Request body for POST /api/v1/customers
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,

    #[validate(range(min = 1, message = "Age must be at least 1"))]
    pub age: i32,

    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile_number: String,

    #[validate(email(message = "Email must be valid"))]
    pub email_address: String,

    /// Validated but never stored; the initial digest is generated server side
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "Addresses cannot be empty"))]
    pub addresses: Vec<AddressRequest>,
}

impl From<CreateCustomerRequest> for CreateCustomerInput {
    fn from(request: CreateCustomerRequest) -> Self {
        CreateCustomerInput {
            first_name: request.first_name,
            last_name: request.last_name,
            full_name: request.full_name,
            age: request.age,
            mobile_number: request.mobile_number,
            email_address: request.email_address,
            addresses: request.addresses.into_iter().map(NewAddress::from).collect(),
        }
    }
}

/// Request body for PUT /api/v1/customers
///
/// The record is located by `mobileNumber`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile_number: String,

    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,

    #[validate(range(min = 1, message = "Age must be at least 1"))]
    pub age: i32,

    #[validate(email(message = "Email must be valid"))]
    pub email_address: String,

    /// Validated but ignored; password changes go through the password routes
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl From<UpdateCustomerRequest> for UpdateCustomerInput {
    fn from(request: UpdateCustomerRequest) -> Self {
        UpdateCustomerInput {
            mobile_number: request.mobile_number,
            first_name: request.first_name,
            last_name: request.last_name,
            full_name: request.full_name,
            age: request.age,
            email_address: request.email_address,
        }
    }
}

/// Request body for PATCH /api/v1/customers/{id}/mobile
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMobileRequest {
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub new_mobile_number: String,
}

/// Request body for PATCH /api/v1/customers/{id}/email
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailRequest {
    #[validate(email(message = "Email must be valid"))]
    pub new_email_address: String,
}

/// Request body for PATCH /api/v1/customers/by-mobile/{mobile}/password
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

/// Address as returned on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub address_id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
    pub pincode: i64,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        AddressResponse {
            address_id: address.id,
            street: address.street,
            city: address.city,
            state: address.state,
            country: address.country,
            address_type: address.address_type,
            pincode: address.pincode,
        }
    }
}

/// Customer as returned on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub age: i32,
    pub mobile_number: String,
    pub email_address: String,
    pub status: CustomerStatus,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub addresses: Vec<AddressResponse>,

    /// Present only on the registration response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(record: CustomerRecord) -> Self {
        let customer = record.customer;
        CustomerResponse {
            customer_id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            full_name: customer.full_name,
            age: customer.age,
            mobile_number: customer.mobile_number,
            email_address: customer.email_address,
            status: customer.status,
            created_date: customer.created_at,
            updated_date: customer.updated_at,
            addresses: record
                .addresses
                .into_iter()
                .map(AddressResponse::from)
                .collect(),
            otp: record.otp,
        }
    }
}
