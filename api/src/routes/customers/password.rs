//! Password handlers under /api/v1/customers

use actix_web::{web, HttpResponse};
use validator::Validate;

use cms_core::repositories::{AddressRepository, CustomerRepository, OtpRepository};

use crate::dto::customer::{CustomerResponse, UpdatePasswordRequest};
use crate::handlers::{domain_error_response, validation_error_response};

use super::AppState;

/// PATCH /api/v1/customers/by-mobile/{mobile}/password
pub async fn update_password<C, A, O>(
    state: web::Data<AppState<C, A, O>>,
    path: web::Path<String>,
    request: web::Json<UpdatePasswordRequest>,
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
        .update_password(&path.into_inner(), &request.new_password)
        .await
    {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}

/// PATCH /api/v1/customers/forgot-password/{mobile}/{newPassword}/{confirmPassword}
///
/// Path-parameter variant of the password reset; the new password must be
/// confirmed and both values travel in the path.
pub async fn forgot_password<C, A, O>(
    state: web::Data<AppState<C, A, O>>,
    path: web::Path<(String, String, String)>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    A: AddressRepository + 'static,
    O: OtpRepository + 'static,
{
    let (mobile_number, new_password, confirm_password) = path.into_inner();

    match state
        .customer_service
        .forget_password(&mobile_number, &new_password, &confirm_password)
        .await
    {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}
