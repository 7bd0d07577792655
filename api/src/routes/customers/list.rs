//! Handler for GET /api/v1/customers

use actix_web::{web, HttpResponse};

use cms_core::repositories::{AddressRepository, CustomerRepository, OtpRepository};
use cms_shared::types::PageQuery;

use crate::dto::customer::CustomerResponse;
use crate::handlers::domain_error_response;

use super::AppState;

/// Lists customers one page at a time.
///
/// Query parameters: `page` (0-indexed), `size` (1..=100, default 20) and
/// `sortBy` (default `createdDate`); results are sorted descending.
pub async fn list_customers<C, A, O>(
    state: web::Data<AppState<C, A, O>>,
    query: web::Query<PageQuery>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    A: AddressRepository + 'static,
    O: OtpRepository + 'static,
{
    match state.customer_service.list(query.into_inner()).await {
        Ok(page) => HttpResponse::Ok().json(page.map(CustomerResponse::from)),
        Err(error) => domain_error_response(&error),
    }
}
