//! In-memory implementation of the persistence gateway for testing.
//!
//! One `InMemoryStore` implements all three repository traits over a single
//! shared state so that a customer created through `CustomerRepository` is
//! visible to the address and OTP lookups, mirroring how the MySQL
//! implementations share one database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cms_shared::types::PageQuery;

use crate::domain::entities::{Address, Customer, CustomerStatus, OneTimePassword};
use crate::errors::{DomainError, DomainResult};

use super::{AddressRepository, CustomerRepository, OtpRepository};

#[derive(Default)]
struct StoreState {
    customers: HashMap<i64, Customer>,
    addresses: HashMap<i64, Address>,
    otps: HashMap<i64, OneTimePassword>,
    next_id: i64,
}

impl StoreState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Mock persistence gateway backed by hash maps
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of customer rows currently stored
    pub async fn customer_count(&self) -> usize {
        self.state.read().await.customers.len()
    }

    /// Number of address rows currently stored
    pub async fn address_count(&self) -> usize {
        self.state.read().await.addresses.len()
    }

    /// Number of OTP rows currently stored
    pub async fn otp_count(&self) -> usize {
        self.state.read().await.otps.len()
    }
}

// Emulates the unique indexes on customers; the MySQL implementation relies
// on the schema for the same behavior.
fn check_unique(state: &StoreState, customer: &Customer) -> DomainResult<()> {
    for existing in state.customers.values() {
        if existing.id == customer.id {
            continue;
        }
        if existing.mobile_number == customer.mobile_number {
            return Err(DomainError::already_exists("Mobile number already exists"));
        }
        if existing.email_address == customer.email_address {
            return Err(DomainError::already_exists("Email already exists"));
        }
        if existing.full_name == customer.full_name {
            return Err(DomainError::already_exists("Full name already exists"));
        }
    }
    Ok(())
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn create(
        &self,
        mut customer: Customer,
        addresses: Vec<Address>,
        mut otp: OneTimePassword,
    ) -> DomainResult<(Customer, Vec<Address>, OneTimePassword)> {
        let mut state = self.state.write().await;

        check_unique(&state, &customer)?;

        customer.id = state.next_id();
        let mut saved_addresses = Vec::with_capacity(addresses.len());
        for mut address in addresses {
            address.id = state.next_id();
            address.customer_id = customer.id;
            state.addresses.insert(address.id, address.clone());
            saved_addresses.push(address);
        }
        otp.id = state.next_id();
        otp.customer_id = customer.id;
        state.otps.insert(otp.id, otp.clone());
        state.customers.insert(customer.id, customer.clone());

        Ok((customer, saved_addresses, otp))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Customer>> {
        let state = self.state.read().await;
        Ok(state.customers.get(&id).cloned())
    }

    async fn find_by_mobile_number(&self, mobile_number: &str) -> DomainResult<Option<Customer>> {
        let state = self.state.read().await;
        Ok(state
            .customers
            .values()
            .find(|c| c.mobile_number == mobile_number)
            .cloned())
    }

    async fn find_by_email_address(&self, email_address: &str) -> DomainResult<Option<Customer>> {
        let state = self.state.read().await;
        Ok(state
            .customers
            .values()
            .find(|c| c.email_address == email_address)
            .cloned())
    }

    async fn find_by_full_name(&self, full_name: &str) -> DomainResult<Option<Customer>> {
        let state = self.state.read().await;
        Ok(state
            .customers
            .values()
            .find(|c| c.full_name == full_name)
            .cloned())
    }

    async fn exists_by_mobile_number(&self, mobile_number: &str) -> DomainResult<bool> {
        Ok(self.find_by_mobile_number(mobile_number).await?.is_some())
    }

    async fn exists_by_email_address(&self, email_address: &str) -> DomainResult<bool> {
        Ok(self.find_by_email_address(email_address).await?.is_some())
    }

    async fn exists_by_full_name(&self, full_name: &str) -> DomainResult<bool> {
        Ok(self.find_by_full_name(full_name).await?.is_some())
    }

    async fn list(&self, query: &PageQuery) -> DomainResult<(Vec<Customer>, u64)> {
        let state = self.state.read().await;
        let mut customers: Vec<Customer> = state.customers.values().cloned().collect();
        let total = customers.len() as u64;

        match query.sort_by.as_str() {
            "fullName" => customers.sort_by(|a, b| b.full_name.cmp(&a.full_name)),
            "age" => customers.sort_by(|a, b| b.age.cmp(&a.age)),
            "customerId" => customers.sort_by(|a, b| b.id.cmp(&a.id)),
            "mobileNumber" => customers.sort_by(|a, b| b.mobile_number.cmp(&a.mobile_number)),
            "emailAddress" => customers.sort_by(|a, b| b.email_address.cmp(&a.email_address)),
            "updatedDate" => customers.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
            _ => customers.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        let page: Vec<Customer> = customers
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.size as usize)
            .collect();

        Ok((page, total))
    }

    async fn update(&self, mut customer: Customer) -> DomainResult<Customer> {
        let mut state = self.state.write().await;

        if !state.customers.contains_key(&customer.id) {
            return Err(DomainError::not_found(format!(
                "Customer not found with customerId: {}",
                customer.id
            )));
        }
        check_unique(&state, &customer)?;

        customer.updated_at = chrono::Utc::now();
        state.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn update_mobile_by_id(&self, id: i64, new_mobile_number: &str) -> DomainResult<()> {
        let mut customer = self.require(id).await?;
        customer.mobile_number = new_mobile_number.to_string();
        self.update(customer).await.map(|_| ())
    }

    async fn update_email_by_id(&self, id: i64, new_email_address: &str) -> DomainResult<()> {
        let mut customer = self.require(id).await?;
        customer.email_address = new_email_address.to_string();
        self.update(customer).await.map(|_| ())
    }

    async fn update_password_by_id(&self, id: i64, password_hash: &str) -> DomainResult<()> {
        let mut customer = self.require(id).await?;
        customer.password_hash = password_hash.to_string();
        self.update(customer).await.map(|_| ())
    }

    async fn set_status_by_id(&self, id: i64, status: CustomerStatus) -> DomainResult<()> {
        let mut customer = self.require(id).await?;
        customer.status = status;
        self.update(customer).await.map(|_| ())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<bool> {
        let mut state = self.state.write().await;
        let removed = state.customers.remove(&id).is_some();
        if removed {
            state.addresses.retain(|_, a| a.customer_id != id);
            state.otps.retain(|_, o| o.customer_id != id);
        }
        Ok(removed)
    }
}

impl InMemoryStore {
    async fn require(&self, id: i64) -> DomainResult<Customer> {
        self.find_by_id(id).await?.ok_or_else(|| {
            DomainError::not_found(format!("Customer not found with customerId: {}", id))
        })
    }
}

#[async_trait]
impl AddressRepository for InMemoryStore {
    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<Address>> {
        let state = self.state.read().await;
        let mut addresses: Vec<Address> = state
            .addresses
            .values()
            .filter(|a| a.customer_id == customer_id)
            .cloned()
            .collect();
        addresses.sort_by_key(|a| a.id);
        Ok(addresses)
    }
}

#[async_trait]
impl OtpRepository for InMemoryStore {
    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<OneTimePassword>> {
        let state = self.state.read().await;
        let mut otps: Vec<OneTimePassword> = state
            .otps
            .values()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect();
        otps.sort_by_key(|o| o.id);
        Ok(otps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(full_name: &str, mobile: &str, email: &str) -> Customer {
        Customer::new(
            "First".to_string(),
            "Last".to_string(),
            full_name.to_string(),
            30,
            mobile.to_string(),
            email.to_string(),
            "$2b$12$digest".to_string(),
        )
    }

    fn address() -> Address {
        Address::new(
            "1 Main St".to_string(),
            "Metropolis".to_string(),
            "State".to_string(),
            "Country".to_string(),
            None,
            555555,
        )
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_links_rows() {
        let store = InMemoryStore::new();
        let (saved, addresses, otp) = store
            .create(
                customer("A B", "111", "a@b.com"),
                vec![address(), address()],
                OneTimePassword::new("123456".to_string()),
            )
            .await
            .unwrap();

        assert!(saved.id > 0);
        assert_eq!(addresses.len(), 2);
        assert!(addresses.iter().all(|a| a.customer_id == saved.id));
        assert_eq!(otp.customer_id, saved.id);
        assert_eq!(
            OtpRepository::find_by_customer(&store, saved.id).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_duplicate_create_leaves_no_partial_rows() {
        let store = InMemoryStore::new();
        store
            .create(
                customer("A B", "111", "a@b.com"),
                vec![address()],
                OneTimePassword::new("123456".to_string()),
            )
            .await
            .unwrap();

        let err = store
            .create(
                customer("C D", "111", "c@d.com"),
                vec![address()],
                OneTimePassword::new("654321".to_string()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::AlreadyExists { .. }));
        assert_eq!(store.customer_count().await, 1);
        assert_eq!(store.address_count().await, 1);
        assert_eq!(store.otp_count().await, 1);
    }

    #[tokio::test]
    async fn test_delete_cascades() {
        let store = InMemoryStore::new();
        let (saved, _, _) = store
            .create(
                customer("A B", "111", "a@b.com"),
                vec![address()],
                OneTimePassword::new("123456".to_string()),
            )
            .await
            .unwrap();

        assert!(store.delete_by_id(saved.id).await.unwrap());
        assert!(!store.delete_by_id(saved.id).await.unwrap());
        assert_eq!(store.address_count().await, 0);
        assert_eq!(store.otp_count().await, 0);
    }

    #[tokio::test]
    async fn test_list_sorts_descending() {
        let store = InMemoryStore::new();
        for (name, mobile, email, age) in [
            ("A A", "100", "a@a.com", 20),
            ("B B", "200", "b@b.com", 40),
            ("C C", "300", "c@c.com", 30),
        ] {
            let mut c = customer(name, mobile, email);
            c.age = age;
            store
                .create(c, vec![address()], OneTimePassword::new("123456".to_string()))
                .await
                .unwrap();
        }

        let query = PageQuery::new(0, 2, "age");
        let (page, total) = store.list(&query).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].age, 40);
        assert_eq!(page[1].age, 30);
    }
}
