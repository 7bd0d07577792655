//! Common validation utilities
//!
//! Structural checks used by both the API layer (request DTOs) and the
//! service layer (path/query parameters that bypass DTO validation).

use once_cell::sync::Lazy;
use regex::Regex;

/// Lower bound for a valid postal code (inclusive)
pub const PINCODE_MIN: i64 = 10_000;

/// Upper bound for a valid postal code (inclusive)
pub const PINCODE_MAX: i64 = 9_999_999;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email regex must compile")
});

/// Check that a string contains at least one non-whitespace character
pub fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check that an email address has a valid shape
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check that a postal code falls in the accepted range
pub fn is_valid_pincode(value: i64) -> bool {
    (PINCODE_MIN..=PINCODE_MAX).contains(&value)
}
