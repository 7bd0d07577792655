//! Domain-specific error types and error handling.
//!
//! Handlers never catch and recover: every failure surfaces to the API
//! boundary, which maps this taxonomy onto HTTP statuses.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// A uniqueness constraint would be violated (maps to 409)
    #[error("{message}")]
    AlreadyExists { message: String },

    /// No matching record (maps to 404)
    #[error("{message}")]
    NotFound { message: String },

    /// Presented OTP does not match any stored code (maps to 400)
    #[error("{message}")]
    InvalidOtp { message: String },

    /// New password and confirmation differ (maps to 400)
    #[error("{message}")]
    PasswordMismatch { message: String },

    /// Malformed or missing input (maps to 400)
    #[error("{message}")]
    Validation { message: String },

    /// Storage-level failure (maps to 500)
    #[error("Database error: {message}")]
    Database { message: String },

    /// Anything else unexpected (maps to 500)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn already_exists(message: impl Into<String>) -> Self {
        DomainError::AlreadyExists { message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound { message: message.into() }
    }

    pub fn invalid_otp(message: impl Into<String>) -> Self {
        DomainError::InvalidOtp { message: message.into() }
    }

    pub fn password_mismatch(message: impl Into<String>) -> Self {
        DomainError::PasswordMismatch { message: message.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation { message: message.into() }
    }

    pub fn database(message: impl Into<String>) -> Self {
        DomainError::Database { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal { message: message.into() }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
