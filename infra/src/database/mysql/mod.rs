//! MySQL repository implementations.

mod address_repository_impl;
mod customer_repository_impl;
mod otp_repository_impl;

pub use address_repository_impl::MySqlAddressRepository;
pub use customer_repository_impl::MySqlCustomerRepository;
pub use otp_repository_impl::MySqlOtpRepository;

use cms_core::errors::{DomainError, DomainResult};
use sqlx::mysql::MySqlRow;
use sqlx::Row;

/// Read a column from a row, wrapping decode failures
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> DomainResult<T>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to read column {}: {}", name, e)))
}

/// Map a write error, translating unique-index violations (SQLSTATE 23000)
/// into the conflict message for the violated key.
///
/// The unique indexes are the authoritative uniqueness guard; this mapping
/// closes the race left open by service-level existence checks.
pub(crate) fn map_unique_violation(err: sqlx::Error, context: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23000") {
            let message = db_err.message();
            if message.contains("mobile_number") {
                return DomainError::already_exists("Mobile number already exists");
            }
            if message.contains("email_address") {
                return DomainError::already_exists("Email already exists");
            }
            if message.contains("full_name") {
                return DomainError::already_exists("Full name already exists");
            }
            return DomainError::already_exists("Record already exists");
        }
    }
    DomainError::database(format!("{}: {}", context, err))
}

/// Map an API-facing sort field onto a customers column.
///
/// Acts as a whitelist: the result is interpolated into SQL, so unknown
/// values must never pass through.
pub(crate) fn sort_column(sort_by: &str) -> &'static str {
    match sort_by {
        "customerId" => "customer_id",
        "firstName" => "first_name",
        "lastName" => "last_name",
        "fullName" => "full_name",
        "age" => "age",
        "mobileNumber" => "mobile_number",
        "emailAddress" => "email_address",
        "status" => "status",
        "updatedDate" => "updated_date",
        _ => "created_date",
    }
}
