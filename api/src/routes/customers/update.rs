//! Update handlers under /api/v1/customers

use actix_web::{web, HttpResponse};
use validator::Validate;

use cms_core::repositories::{AddressRepository, CustomerRepository, OtpRepository};

use crate::dto::customer::{
    CustomerResponse, UpdateCustomerRequest, UpdateEmailRequest, UpdateMobileRequest,
};
use crate::handlers::{domain_error_response, validation_error_response};

use super::AppState;

/// PUT /api/v1/customers
///
/// Full update of the customer identified by the body's `mobileNumber`;
/// addresses are left untouched.
pub async fn update_customer<C, A, O>(
    state: web::Data<AppState<C, A, O>>,
    request: web::Json<UpdateCustomerRequest>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    A: AddressRepository + 'static,
    O: OtpRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.customer_service.update_full(request.into()).await {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}

/// PATCH /api/v1/customers/{id}/mobile
pub async fn update_mobile<C, A, O>(
    state: web::Data<AppState<C, A, O>>,
    path: web::Path<i64>,
    request: web::Json<UpdateMobileRequest>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    A: AddressRepository + 'static,
    O: OtpRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .customer_service
        .update_mobile(path.into_inner(), &request.new_mobile_number)
        .await
    {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}

/// PATCH /api/v1/customers/{id}/email
pub async fn update_email<C, A, O>(
    state: web::Data<AppState<C, A, O>>,
    path: web::Path<i64>,
    request: web::Json<UpdateEmailRequest>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    A: AddressRepository + 'static,
    O: OtpRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .customer_service
        .update_email(path.into_inner(), &request.new_email_address)
        .await
    {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}
