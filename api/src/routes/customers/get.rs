//! Lookup handlers under /api/v1/customers

use actix_web::{web, HttpResponse};

use cms_core::repositories::{AddressRepository, CustomerRepository, OtpRepository};

use crate::dto::customer::CustomerResponse;
use crate::handlers::domain_error_response;

use super::AppState;

/// GET /api/v1/customers/{id}
pub async fn get_customer_by_id<C, A, O>(
    state: web::Data<AppState<C, A, O>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    A: AddressRepository + 'static,
    O: OtpRepository + 'static,
{
    match state.customer_service.get_by_id(path.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}

/// GET /api/v1/customers/by-mobile/{mobile}
pub async fn get_customer_by_mobile<C, A, O>(
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
        .get_by_mobile_number(&path.into_inner())
        .await
    {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}

/// GET /api/v1/customers/by-email/{email}
pub async fn get_customer_by_email<C, A, O>(
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
        .get_by_email_address(&path.into_inner())
        .await
    {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}

/// GET /api/v1/customers/by-name/{name}
pub async fn get_customer_by_name<C, A, O>(
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
        .get_by_full_name(&path.into_inner())
        .await
    {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}
