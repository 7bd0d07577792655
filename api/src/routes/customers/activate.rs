//! Handler for PATCH /api/v1/customers/activate/{mobile}/{otp}

use actix_web::{web, HttpResponse};

use cms_core::repositories::{AddressRepository, CustomerRepository, OtpRepository};

use crate::dto::customer::CustomerResponse;
use crate::handlers::domain_error_response;

use super::AppState;

/// Activates a customer account when the presented OTP matches one issued
/// to it; returns 400 on a mismatch.
pub async fn activate_customer<C, A, O>(
    state: web::Data<AppState<C, A, O>>,
    path: web::Path<(String, String)>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    A: AddressRepository + 'static,
    O: OtpRepository + 'static,
{
    let (mobile_number, otp) = path.into_inner();

    match state
        .customer_service
        .activate_by_otp(&mobile_number, &otp)
        .await
    {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}
