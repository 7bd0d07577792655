//! Error translation at the HTTP boundary.
//!
//! Domain failures become `{"error": message}` bodies with the status from
//! the error taxonomy; request validation failures become a 400 with a
//! field-to-message map keyed by the camelCase wire names.

use std::collections::BTreeMap;

use actix_web::HttpResponse;
use serde_json::json;
use validator::ValidationErrors;

use cms_core::errors::DomainError;

/// Map a domain error onto an HTTP response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let body = json!({ "error": error.to_string() });

    match error {
        DomainError::AlreadyExists { .. } => HttpResponse::Conflict().json(body),
        DomainError::NotFound { .. } => HttpResponse::NotFound().json(body),
        DomainError::InvalidOtp { .. }
        | DomainError::PasswordMismatch { .. }
        | DomainError::Validation { .. } => HttpResponse::BadRequest().json(body),
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            log::error!("request failed: {}", error);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Map request validation failures onto a 400 field map
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let field_map: BTreeMap<String, String> = errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let message = field_errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Invalid value".to_string());
            (to_camel_case(field), message)
        })
        .collect();

    log::warn!("request validation failed: {:?}", field_map);
    HttpResponse::BadRequest().json(field_map)
}

// Validator reports struct field names; the wire uses camelCase.
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
