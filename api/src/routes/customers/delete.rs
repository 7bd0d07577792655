//! Deletion handlers under /api/v1/customers
//!
//! DELETE endpoints are soft deletes: the record stays and its status flips
//! to INACTIVE. The purge endpoint is the only hard delete.

use actix_web::{web, HttpResponse};

use cms_core::repositories::{AddressRepository, CustomerRepository, OtpRepository};

use crate::dto::customer::CustomerResponse;
use crate::handlers::domain_error_response;

use super::AppState;

/// DELETE /api/v1/customers/{id}
pub async fn delete_customer_by_id<C, A, O>(
    state: web::Data<AppState<C, A, O>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    A: AddressRepository + 'static,
    O: OtpRepository + 'static,
{
    match state.customer_service.delete_by_id(path.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}

/// DELETE /api/v1/customers/by-mobile/{mobile}
pub async fn delete_customer_by_mobile<C, A, O>(
    state: web::Data<AppState<C, A, O>>,
    path: web::Path<String>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    A: AddressRepository + 'static,
    O: OtpRepository + 'static,
{
    match state
        .customer_service
        .delete_by_mobile_number(&path.into_inner())
        .await
    {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}

/// DELETE /api/v1/customers/by-email/{email}
pub async fn delete_customer_by_email<C, A, O>(
    state: web::Data<AppState<C, A, O>>,
    path: web::Path<String>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    A: AddressRepository + 'static,
    O: OtpRepository + 'static,
{
    match state
        .customer_service
        .delete_by_email_address(&path.into_inner())
        .await
    {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}

/// DELETE /api/v1/customers/{id}/purge
///
/// Hard delete: removes the customer row together with its addresses and
/// OTP codes, and returns the record as it was just before removal.
pub async fn purge_customer_by_id<C, A, O>(
    state: web::Data<AppState<C, A, O>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    A: AddressRepository + 'static,
    O: OtpRepository + 'static,
{
    match state.customer_service.purge_by_id(path.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}
