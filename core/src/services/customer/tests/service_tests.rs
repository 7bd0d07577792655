//! Customer service tests against the in-memory store.

use std::sync::Arc;

use cms_shared::types::PageQuery;

use crate::domain::entities::CustomerStatus;
use crate::errors::DomainError;
use crate::repositories::InMemoryStore;
use crate::services::credentials::verify_password;
use crate::services::customer::{CreateCustomerInput, CustomerService, NewAddress, UpdateCustomerInput};

type TestService = CustomerService<InMemoryStore, InMemoryStore, InMemoryStore>;

fn service(store: &InMemoryStore) -> TestService {
    CustomerService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
    )
}

fn address() -> NewAddress {
    NewAddress {
        street: "1 Main St".to_string(),
        city: "Metropolis".to_string(),
        state: "State".to_string(),
        country: "Country".to_string(),
        address_type: Some("HOME".to_string()),
        pincode: 560001,
    }
}

fn input(full_name: &str, mobile: &str, email: &str) -> CreateCustomerInput {
    CreateCustomerInput {
        first_name: "First".to_string(),
        last_name: "Last".to_string(),
        full_name: full_name.to_string(),
        age: 30,
        mobile_number: mobile.to_string(),
        email_address: email.to_string(),
        addresses: vec![address()],
    }
}

#[tokio::test]
async fn test_create_issues_inactive_customer_with_otp() {
    let store = InMemoryStore::new();
    let service = service(&store);

    let record = service
        .create(input("Ada Lovelace", "9000000001", "ada@example.com"))
        .await
        .unwrap();

    assert!(record.customer.id > 0);
    assert_eq!(record.customer.status, CustomerStatus::Inactive);
    assert_eq!(record.addresses.len(), 1);
    assert_eq!(record.addresses[0].customer_id, record.customer.id);

    let otp = record.otp.unwrap();
    assert_eq!(otp.len(), 6);
    assert!(otp.chars().all(|c| c.is_ascii_digit()));

    // Generated password is stored only as a bcrypt digest
    assert!(record.customer.password_hash.starts_with("$2"));
}

#[tokio::test]
async fn test_create_rejects_duplicates_without_partial_rows() {
    let store = InMemoryStore::new();
    let service = service(&store);

    service
        .create(input("Ada Lovelace", "9000000001", "ada@example.com"))
        .await
        .unwrap();

    let err = service
        .create(input("Grace Hopper", "9000000001", "grace@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Mobile number already exists");

    let err = service
        .create(input("Grace Hopper", "9000000002", "ada@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Email already exists");

    let err = service
        .create(input("Ada Lovelace", "9000000002", "grace@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Full name already exists");

    assert_eq!(store.customer_count().await, 1);
    assert_eq!(store.address_count().await, 1);
    assert_eq!(store.otp_count().await, 1);
}

#[tokio::test]
async fn test_create_validates_addresses() {
    let store = InMemoryStore::new();
    let service = service(&store);

    let mut no_addresses = input("Ada Lovelace", "9000000001", "ada@example.com");
    no_addresses.addresses.clear();
    let err = service.create(no_addresses).await.unwrap_err();
    assert_eq!(err.to_string(), "Addresses cannot be empty");

    let mut bad_pincode = input("Ada Lovelace", "9000000001", "ada@example.com");
    bad_pincode.addresses[0].pincode = 99;
    let err = service.create(bad_pincode).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
    assert_eq!(store.customer_count().await, 0);
}

#[tokio::test]
async fn test_activation_flow() {
    let store = InMemoryStore::new();
    let service = service(&store);

    let record = service
        .create(input("Ada Lovelace", "9000000001", "ada@example.com"))
        .await
        .unwrap();
    let otp = record.otp.unwrap();
    let wrong = if otp == "000000" { "111111" } else { "000000" };

    let err = service.activate_by_otp("9000000001", wrong).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidOtp { .. }));

    let err = service.activate_by_otp("9999999999", &otp).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Customer not found with Mobile Number: 9999999999"
    );

    let activated = service.activate_by_otp("9000000001", &otp).await.unwrap();
    assert_eq!(activated.customer.status, CustomerStatus::Active);
}

#[tokio::test]
async fn test_forget_password_requires_confirmation() {
    let store = InMemoryStore::new();
    let service = service(&store);

    service
        .create(input("Ada Lovelace", "9000000001", "ada@example.com"))
        .await
        .unwrap();

    let err = service
        .forget_password("9000000001", "new-secret", "other-secret")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::PasswordMismatch { .. }));

    let record = service
        .forget_password("9000000001", "new-secret", "new-secret")
        .await
        .unwrap();
    assert!(verify_password("new-secret", &record.customer.password_hash).unwrap());
}

#[tokio::test]
async fn test_update_password_replaces_digest() {
    let store = InMemoryStore::new();
    let service = service(&store);

    let before = service
        .create(input("Ada Lovelace", "9000000001", "ada@example.com"))
        .await
        .unwrap();

    let after = service
        .update_password("9000000001", "rotated-secret")
        .await
        .unwrap();
    assert_ne!(before.customer.password_hash, after.customer.password_hash);
    assert!(verify_password("rotated-secret", &after.customer.password_hash).unwrap());
}

#[tokio::test]
async fn test_update_mobile_checks_conflicts() {
    let store = InMemoryStore::new();
    let service = service(&store);

    let first = service
        .create(input("Ada Lovelace", "9000000001", "ada@example.com"))
        .await
        .unwrap();
    service
        .create(input("Grace Hopper", "9000000002", "grace@example.com"))
        .await
        .unwrap();

    let err = service
        .update_mobile(first.customer.id, "9000000002")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Mobile number already exists");

    let err = service.update_mobile(first.customer.id, "  ").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    let updated = service
        .update_mobile(first.customer.id, "9000000003")
        .await
        .unwrap();
    assert_eq!(updated.customer.mobile_number, "9000000003");
}

#[tokio::test]
async fn test_update_email_validates_shape() {
    let store = InMemoryStore::new();
    let service = service(&store);

    let record = service
        .create(input("Ada Lovelace", "9000000001", "ada@example.com"))
        .await
        .unwrap();

    let err = service
        .update_email(record.customer.id, "not-an-email")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Email must be valid");

    let updated = service
        .update_email(record.customer.id, "ada.new@example.com")
        .await
        .unwrap();
    assert_eq!(updated.customer.email_address, "ada.new@example.com");
}

#[tokio::test]
async fn test_update_full_replaces_fields_keeps_addresses() {
    let store = InMemoryStore::new();
    let service = service(&store);

    service
        .create(input("Ada Lovelace", "9000000001", "ada@example.com"))
        .await
        .unwrap();

    let updated = service
        .update_full(UpdateCustomerInput {
            mobile_number: "9000000001".to_string(),
            first_name: "Augusta".to_string(),
            last_name: "King".to_string(),
            full_name: "Augusta King".to_string(),
            age: 37,
            email_address: "augusta@example.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(updated.customer.full_name, "Augusta King");
    assert_eq!(updated.customer.age, 37);
    assert_eq!(updated.customer.email_address, "augusta@example.com");
    assert_eq!(updated.addresses.len(), 1);
}

#[tokio::test]
async fn test_soft_delete_flips_status_and_keeps_row() {
    let store = InMemoryStore::new();
    let service = service(&store);

    let record = service
        .create(input("Ada Lovelace", "9000000001", "ada@example.com"))
        .await
        .unwrap();
    let otp = record.otp.unwrap();
    service.activate_by_otp("9000000001", &otp).await.unwrap();

    let deleted = service.delete_by_mobile_number("9000000001").await.unwrap();
    assert_eq!(deleted.customer.status, CustomerStatus::Inactive);
    assert_eq!(store.customer_count().await, 1);

    // Lookups still resolve a soft-deleted record
    let found = service.get_by_email_address("ada@example.com").await.unwrap();
    assert_eq!(found.customer.status, CustomerStatus::Inactive);
}

#[tokio::test]
async fn test_purge_removes_all_rows() {
    let store = InMemoryStore::new();
    let service = service(&store);

    let record = service
        .create(input("Ada Lovelace", "9000000001", "ada@example.com"))
        .await
        .unwrap();

    let purged = service.purge_by_id(record.customer.id).await.unwrap();
    assert_eq!(purged.addresses.len(), 1);
    assert_eq!(store.customer_count().await, 0);
    assert_eq!(store.address_count().await, 0);
    assert_eq!(store.otp_count().await, 0);

    let err = service.purge_by_id(record.customer.id).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Customer not found with customerId: {}", record.customer.id)
    );
}

#[tokio::test]
async fn test_list_paginates_with_addresses() {
    let store = InMemoryStore::new();
    let service = service(&store);

    for i in 0..3 {
        service
            .create(input(
                &format!("Customer {}", i),
                &format!("900000000{}", i),
                &format!("c{}@example.com", i),
            ))
            .await
            .unwrap();
    }

    let page = service
        .list(PageQuery::new(0, 2, "customerId"))
        .await
        .unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.count(), 2);
    assert!(page.data.iter().all(|r| r.addresses.len() == 1));
    assert!(page.data[0].customer.id > page.data[1].customer.id);
}

#[tokio::test]
async fn test_lookup_misses_use_specific_messages() {
    let store = InMemoryStore::new();
    let service = service(&store);

    let err = service.get_by_id(42).await.unwrap_err();
    assert_eq!(err.to_string(), "Customer not found with customerId: 42");

    let err = service.get_by_full_name("Nobody").await.unwrap_err();
    assert_eq!(err.to_string(), "Customer not found with Full Name: Nobody");

    let err = service
        .get_by_email_address("nobody@example.com")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Customer not found with Email Address: nobody@example.com"
    );
}
