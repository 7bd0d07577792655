//! Application factory
//!
//! Builds the Actix-web application with middleware, the customer route
//! table and the shared application state.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use cms_core::repositories::{AddressRepository, CustomerRepository, OtpRepository};

use crate::middleware::cors::create_cors;
use crate::routes::customers::{
    activate::activate_customer,
    create::create_customer,
    delete::{
        delete_customer_by_email, delete_customer_by_id, delete_customer_by_mobile,
        purge_customer_by_id,
    },
    get::{
        get_customer_by_email, get_customer_by_id, get_customer_by_mobile, get_customer_by_name,
    },
    list::list_customers,
    password::{forgot_password, update_password},
    update::{update_customer, update_email, update_mobile},
    AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<C, A, O>(
    app_state: web::Data<AppState<C, A, O>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody<
                Error = impl std::fmt::Debug + Into<Box<dyn std::error::Error>>,
            >,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    C: CustomerRepository + 'static,
    A: AddressRepository + 'static,
    O: OtpRepository + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/customers")
                    .route("", web::post().to(create_customer::<C, A, O>))
                    .route("", web::get().to(list_customers::<C, A, O>))
                    .route("", web::put().to(update_customer::<C, A, O>))
                    .route(
                        "/by-mobile/{mobile}",
                        web::get().to(get_customer_by_mobile::<C, A, O>),
                    )
                    .route(
                        "/by-mobile/{mobile}",
                        web::delete().to(delete_customer_by_mobile::<C, A, O>),
                    )
                    .route(
                        "/by-mobile/{mobile}/password",
                        web::patch().to(update_password::<C, A, O>),
                    )
                    .route(
                        "/by-email/{email}",
                        web::get().to(get_customer_by_email::<C, A, O>),
                    )
                    .route(
                        "/by-email/{email}",
                        web::delete().to(delete_customer_by_email::<C, A, O>),
                    )
                    .route(
                        "/by-name/{name}",
                        web::get().to(get_customer_by_name::<C, A, O>),
                    )
                    .route(
                        "/forgot-password/{mobile}/{newPassword}/{confirmPassword}",
                        web::patch().to(forgot_password::<C, A, O>),
                    )
                    .route(
                        "/activate/{mobile}/{otp}",
                        web::patch().to(activate_customer::<C, A, O>),
                    )
                    .route("/{id}", web::get().to(get_customer_by_id::<C, A, O>))
                    .route("/{id}", web::delete().to(delete_customer_by_id::<C, A, O>))
                    .route(
                        "/{id}/purge",
                        web::delete().to(purge_customer_by_id::<C, A, O>),
                    )
                    .route("/{id}/mobile", web::patch().to(update_mobile::<C, A, O>))
                    .route("/{id}/email", web::patch().to(update_email::<C, A, O>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "customer-management-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "The requested resource was not found"
    }))
}
