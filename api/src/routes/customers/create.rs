//! Handler for POST /api/v1/customers

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use validator::Validate;

use cms_core::repositories::{AddressRepository, CustomerRepository, OtpRepository};
use cms_core::services::customer::CustomerService;

use crate::dto::customer::{CreateCustomerRequest, CustomerResponse};
use crate::handlers::{domain_error_response, validation_error_response};

/// Application state that holds shared services
pub struct AppState<C, A, O>
where
    C: CustomerRepository,
    A: AddressRepository,
    O: OtpRepository,
{
    pub customer_service: Arc<CustomerService<C, A, O>>,
}

/// Registers a new customer.
///
/// Credentials are generated server-side: the response carries the
/// plaintext OTP for activation, never the password. Returns 409 when the
/// mobile number, email address or full name is already taken.
pub async fn create_customer<C, A, O>(
    state: web::Data<AppState<C, A, O>>,
    request: web::Json<CreateCustomerRequest>,
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
    // Nested address payloads are validated individually
    for address in &request.addresses {
        if let Err(errors) = address.validate() {
            return validation_error_response(&errors);
        }
    }

    log::info!("Registering customer with mobile: {}", request.mobile_number);

    match state.customer_service.create(request.into()).await {
        Ok(record) => HttpResponse::Ok().json(CustomerResponse::from(record)),
        Err(error) => domain_error_response(&error),
    }
}
