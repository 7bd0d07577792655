//! Route-level tests running the full application against the in-memory
//! store, exercising the JSON wire format end to end.

use std::sync::Arc;

use actix_web::{test, web};
use serde_json::{json, Value};

use cms_api::app::create_app;
use cms_api::routes::customers::AppState;
use cms_core::repositories::InMemoryStore;
use cms_core::services::CustomerService;

type TestState = AppState<InMemoryStore, InMemoryStore, InMemoryStore>;

fn app_state(store: &InMemoryStore) -> web::Data<TestState> {
    let customer_service = Arc::new(CustomerService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
    ));
    web::Data::new(AppState { customer_service })
}

fn customer_payload(full_name: &str, mobile: &str, email: &str) -> Value {
    json!({
        "firstName": "First",
        "lastName": "Last",
        "fullName": full_name,
        "age": 30,
        "mobileNumber": mobile,
        "emailAddress": email,
        "password": "initial-secret",
        "addresses": [{
            "street": "1 Main St",
            "city": "Metropolis",
            "state": "State",
            "country": "Country",
            "addressType": "HOME",
            "pincode": 560001
        }]
    })
}

async fn register<S, B>(app: &S, payload: Value) -> Value
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
    B::Error: std::fmt::Debug,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success());
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn test_register_returns_otp_and_inactive_status() {
    let store = InMemoryStore::new();
    let app = test::init_service(create_app(app_state(&store))).await;

    let body = register(
        &app,
        customer_payload("Ada Lovelace", "9000000001", "ada@example.com"),
    )
    .await;

    assert!(body["customerId"].as_i64().unwrap() > 0);
    assert_eq!(body["status"], "INACTIVE");
    assert_eq!(body["addresses"][0]["pincode"], 560001);

    let otp = body["otp"].as_str().unwrap();
    assert_eq!(otp.len(), 6);
    assert!(otp.chars().all(|c| c.is_ascii_digit()));

    // The digest never leaves the server
    let raw = serde_json::to_string(&body).unwrap();
    assert!(!raw.contains("password"));
}

#[actix_web::test]
async fn test_duplicate_mobile_is_conflict() {
    let store = InMemoryStore::new();
    let app = test::init_service(create_app(app_state(&store))).await;

    register(
        &app,
        customer_payload("Ada Lovelace", "9000000001", "ada@example.com"),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(customer_payload(
            "Grace Hopper",
            "9000000001",
            "grace@example.com",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Mobile number already exists");
}

#[actix_web::test]
async fn test_validation_errors_are_a_field_map() {
    let store = InMemoryStore::new();
    let app = test::init_service(create_app(app_state(&store))).await;

    let mut payload = customer_payload("Ada Lovelace", "9000000001", "not-an-email");
    payload["firstName"] = json!("");
    payload["age"] = json!(0);

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["firstName"], "First name is required");
    assert_eq!(body["age"], "Age must be at least 1");
    assert_eq!(body["emailAddress"], "Email must be valid");
}

#[actix_web::test]
async fn test_short_password_is_rejected_at_registration() {
    let store = InMemoryStore::new();
    let app = test::init_service(create_app(app_state(&store))).await;

    let mut payload = customer_payload("Ada Lovelace", "9000000001", "ada@example.com");
    payload["password"] = json!("abc");

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(payload.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["password"], "Password must be at least 6 characters");

    // Omitting the field entirely is rejected the same way
    payload.as_object_mut().unwrap().remove("password");
    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["password"], "Password must be at least 6 characters");
}

#[actix_web::test]
async fn test_activation_round_trip() {
    let store = InMemoryStore::new();
    let app = test::init_service(create_app(app_state(&store))).await;

    let body = register(
        &app,
        customer_payload("Ada Lovelace", "9000000001", "ada@example.com"),
    )
    .await;
    let otp = body["otp"].as_str().unwrap().to_string();
    let wrong = if otp == "000000" { "111111" } else { "000000" };

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/customers/activate/9000000001/{}", wrong))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(
        error["error"],
        "Invalid OTP provided for mobile number: 9000000001"
    );

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/customers/activate/9000000001/{}", otp))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let activated: Value = test::read_body_json(resp).await;
    assert_eq!(activated["status"], "ACTIVE");
    // The OTP is only echoed on registration
    assert!(activated.get("otp").is_none());
}

#[actix_web::test]
async fn test_lookup_soft_delete_and_purge_flow() {
    let store = InMemoryStore::new();
    let app = test::init_service(create_app(app_state(&store))).await;

    let body = register(
        &app,
        customer_payload("Ada-Lovelace", "9000000001", "ada@example.com"),
    )
    .await;
    let id = body["customerId"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/by-mobile/9000000001")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get()
        .uri("/api/v1/customers/by-name/Ada-Lovelace")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // Soft delete keeps the row but flips the status
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/customers/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let deleted: Value = test::read_body_json(resp).await;
    assert_eq!(deleted["status"], "INACTIVE");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/customers/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // Purge removes the row for good
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/customers/{}/purge", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/customers/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let missing: Value = test::read_body_json(resp).await;
    assert_eq!(
        missing["error"],
        format!("Customer not found with customerId: {}", id)
    );
}

#[actix_web::test]
async fn test_forgot_password_requires_matching_confirmation() {
    let store = InMemoryStore::new();
    let app = test::init_service(create_app(app_state(&store))).await;

    register(
        &app,
        customer_payload("Ada Lovelace", "9000000001", "ada@example.com"),
    )
    .await;

    let req = test::TestRequest::patch()
        .uri("/api/v1/customers/forgot-password/9000000001/new-secret/other-secret")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "New password and confirm password do not match");

    let req = test::TestRequest::patch()
        .uri("/api/v1/customers/forgot-password/9000000001/new-secret/new-secret")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_update_mobile_and_email() {
    let store = InMemoryStore::new();
    let app = test::init_service(create_app(app_state(&store))).await;

    let body = register(
        &app,
        customer_payload("Ada Lovelace", "9000000001", "ada@example.com"),
    )
    .await;
    let id = body["customerId"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/customers/{}/mobile", id))
        .set_json(json!({ "newMobileNumber": "9000000002" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["mobileNumber"], "9000000002");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/customers/{}/email", id))
        .set_json(json!({ "newEmailAddress": "bad-address" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let errors: Value = test::read_body_json(resp).await;
    assert_eq!(errors["newEmailAddress"], "Email must be valid");
}

#[actix_web::test]
async fn test_full_update_by_mobile_number() {
    let store = InMemoryStore::new();
    let app = test::init_service(create_app(app_state(&store))).await;

    register(
        &app,
        customer_payload("Ada Lovelace", "9000000001", "ada@example.com"),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/v1/customers")
        .set_json(json!({
            "mobileNumber": "9000000001",
            "firstName": "Augusta",
            "lastName": "King",
            "fullName": "Augusta King",
            "age": 37,
            "emailAddress": "augusta@example.com",
            "password": "still-ignored"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["fullName"], "Augusta King");
    assert_eq!(updated["age"], 37);
    assert_eq!(updated["addresses"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_list_paginates() {
    let store = InMemoryStore::new();
    let app = test::init_service(create_app(app_state(&store))).await;

    for i in 0..3 {
        register(
            &app,
            customer_payload(
                &format!("Customer {}", i),
                &format!("900000000{}", i),
                &format!("c{}@example.com", i),
            ),
        )
        .await;
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/customers?page=0&size=2&sortBy=customerId")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total"], 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["data"].as_array().unwrap().len(), 2);
    assert_eq!(page["page"], 0);
    assert_eq!(page["size"], 2);
}

#[actix_web::test]
async fn test_health_and_unknown_routes() {
    let store = InMemoryStore::new();
    let app = test::init_service(create_app(app_state(&store))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");

    let req = test::TestRequest::get().uri("/api/v2/nothing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
