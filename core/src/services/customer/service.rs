//! Customer service implementation.

use std::sync::Arc;

use tracing::{info, warn};

use cms_shared::types::{PageQuery, PageResponse};
use cms_shared::utils::validation;

use crate::domain::entities::{Address, Customer, CustomerStatus, OneTimePassword};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{AddressRepository, CustomerRepository, OtpRepository};
use crate::services::credentials::{hash_password, CredentialGenerator};

use super::types::{CreateCustomerInput, CustomerRecord, UpdateCustomerInput};

/// Service coordinating customer lifecycle operations
///
/// Generic over the repository traits so the API layer can wire the MySQL
/// implementations while tests run against the in-memory store.
pub struct CustomerService<C, A, O>
where
    C: CustomerRepository,
    A: AddressRepository,
    O: OtpRepository,
{
    customers: Arc<C>,
    addresses: Arc<A>,
    otps: Arc<O>,
    generator: CredentialGenerator,
}

impl<C, A, O> CustomerService<C, A, O>
where
    C: CustomerRepository,
    A: AddressRepository,
    O: OtpRepository,
{
    pub fn new(customers: Arc<C>, addresses: Arc<A>, otps: Arc<O>) -> Self {
        Self {
            customers,
            addresses,
            otps,
            generator: CredentialGenerator::new(),
        }
    }

    /// Registers a new customer.
    ///
    /// The password is generated server-side and only its bcrypt digest is
    /// stored; the caller never learns it. A fresh OTP is persisted with the
    /// record and returned in plaintext so it can be presented to
    /// [`Self::activate_by_otp`]. The customer starts `Inactive`.
    pub async fn create(&self, input: CreateCustomerInput) -> DomainResult<CustomerRecord> {
        validate_addresses(&input)?;

        if self
            .customers
            .exists_by_mobile_number(&input.mobile_number)
            .await?
        {
            warn!(mobile = %input.mobile_number, "registration rejected, mobile number taken");
            return Err(DomainError::already_exists("Mobile number already exists"));
        }
        if self
            .customers
            .exists_by_email_address(&input.email_address)
            .await?
        {
            warn!(email = %input.email_address, "registration rejected, email taken");
            return Err(DomainError::already_exists("Email already exists"));
        }
        if self.customers.exists_by_full_name(&input.full_name).await? {
            warn!(full_name = %input.full_name, "registration rejected, full name taken");
            return Err(DomainError::already_exists("Full name already exists"));
        }

        let password = self.generator.generate_password();
        let password_hash = hash_password(&password)?;
        let otp_code = self.generator.generate_otp();

        let customer = Customer::new(
            input.first_name,
            input.last_name,
            input.full_name,
            input.age,
            input.mobile_number,
            input.email_address,
            password_hash,
        );
        let addresses: Vec<Address> = input.addresses.into_iter().map(Address::from).collect();
        let otp = OneTimePassword::new(otp_code);

        let (customer, addresses, otp) = self.customers.create(customer, addresses, otp).await?;
        info!(customer_id = customer.id, "customer registered");

        Ok(CustomerRecord::with_otp(customer, addresses, otp.code))
    }

    /// One page of customers, each with its addresses
    pub async fn list(&self, query: PageQuery) -> DomainResult<PageResponse<CustomerRecord>> {
        let query = query.validate();
        let (customers, total) = self.customers.list(&query).await?;

        let mut records = Vec::with_capacity(customers.len());
        for customer in customers {
            let addresses = self.addresses.find_by_customer(customer.id).await?;
            records.push(CustomerRecord::new(customer, addresses));
        }

        Ok(PageResponse::new(records, &query, total))
    }

    pub async fn get_by_id(&self, id: i64) -> DomainResult<CustomerRecord> {
        let customer = self.require_by_id(id).await?;
        self.hydrate(customer).await
    }

    pub async fn get_by_mobile_number(&self, mobile_number: &str) -> DomainResult<CustomerRecord> {
        let customer = self.require_by_mobile(mobile_number).await?;
        self.hydrate(customer).await
    }

    pub async fn get_by_email_address(&self, email_address: &str) -> DomainResult<CustomerRecord> {
        let customer = self
            .customers
            .find_by_email_address(email_address)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Customer not found with Email Address: {}",
                    email_address
                ))
            })?;
        self.hydrate(customer).await
    }

    pub async fn get_by_full_name(&self, full_name: &str) -> DomainResult<CustomerRecord> {
        let customer = self
            .customers
            .find_by_full_name(full_name)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("Customer not found with Full Name: {}", full_name))
            })?;
        self.hydrate(customer).await
    }

    /// Full update of a customer located by its current mobile number.
    ///
    /// Addresses are left untouched.
    pub async fn update_full(&self, input: UpdateCustomerInput) -> DomainResult<CustomerRecord> {
        let customer = self.require_by_mobile(&input.mobile_number).await?;

        if input.full_name != customer.full_name
            && self.customers.exists_by_full_name(&input.full_name).await?
        {
            return Err(DomainError::already_exists("Full name already exists"));
        }
        if input.email_address != customer.email_address
            && self
                .customers
                .exists_by_email_address(&input.email_address)
                .await?
        {
            return Err(DomainError::already_exists("Email already exists"));
        }

        let mut updated = customer;
        updated.first_name = input.first_name;
        updated.last_name = input.last_name;
        updated.full_name = input.full_name;
        updated.age = input.age;
        updated.email_address = input.email_address;

        let saved = self.customers.update(updated).await?;
        info!(customer_id = saved.id, "customer updated");
        self.hydrate(saved).await
    }

    /// Changes the mobile number of the customer identified by `id`
    pub async fn update_mobile(&self, id: i64, new_mobile_number: &str) -> DomainResult<CustomerRecord> {
        if !validation::is_not_blank(new_mobile_number) {
            return Err(DomainError::validation("Mobile number is required"));
        }

        let customer = self.require_by_id(id).await?;
        if customer.mobile_number != new_mobile_number
            && self
                .customers
                .exists_by_mobile_number(new_mobile_number)
                .await?
        {
            return Err(DomainError::already_exists("Mobile number already exists"));
        }

        self.customers.update_mobile_by_id(id, new_mobile_number).await?;
        info!(customer_id = id, "mobile number changed");
        self.get_by_id(id).await
    }

    /// Changes the email address of the customer identified by `id`
    pub async fn update_email(&self, id: i64, new_email_address: &str) -> DomainResult<CustomerRecord> {
        if !validation::is_not_blank(new_email_address) {
            return Err(DomainError::validation("Email address is required"));
        }
        if !validation::is_valid_email(new_email_address) {
            return Err(DomainError::validation("Email must be valid"));
        }

        let customer = self.require_by_id(id).await?;
        if customer.email_address != new_email_address
            && self
                .customers
                .exists_by_email_address(new_email_address)
                .await?
        {
            return Err(DomainError::already_exists("Email already exists"));
        }

        self.customers.update_email_by_id(id, new_email_address).await?;
        info!(customer_id = id, "email address changed");
        self.get_by_id(id).await
    }

    /// Sets a new password for the customer identified by mobile number
    pub async fn update_password(
        &self,
        mobile_number: &str,
        new_password: &str,
    ) -> DomainResult<CustomerRecord> {
        if !validation::is_not_blank(new_password) {
            return Err(DomainError::validation("New password is required"));
        }

        let customer = self.require_by_mobile(mobile_number).await?;
        let password_hash = hash_password(new_password)?;
        self.customers
            .update_password_by_id(customer.id, &password_hash)
            .await?;
        info!(customer_id = customer.id, "password changed");
        self.get_by_id(customer.id).await
    }

    /// Password reset: requires the new password to be confirmed
    pub async fn forget_password(
        &self,
        mobile_number: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> DomainResult<CustomerRecord> {
        if new_password != confirm_password {
            warn!(mobile = %mobile_number, "password reset rejected, confirmation mismatch");
            return Err(DomainError::password_mismatch(
                "New password and confirm password do not match",
            ));
        }
        self.update_password(mobile_number, new_password).await
    }

    /// Activates a customer when the presented OTP matches one issued to it
    pub async fn activate_by_otp(&self, mobile_number: &str, otp: &str) -> DomainResult<CustomerRecord> {
        let customer = self.require_by_mobile(mobile_number).await?;

        let issued = self.otps.find_by_customer(customer.id).await?;
        if !issued.iter().any(|candidate| candidate.matches(otp)) {
            warn!(customer_id = customer.id, "activation rejected, OTP mismatch");
            return Err(DomainError::invalid_otp(format!(
                "Invalid OTP provided for mobile number: {}",
                mobile_number
            )));
        }

        self.customers
            .set_status_by_id(customer.id, CustomerStatus::Active)
            .await?;
        info!(customer_id = customer.id, "customer activated");
        self.get_by_id(customer.id).await
    }

    /// Soft delete by id: the record stays but flips to `Inactive`
    pub async fn delete_by_id(&self, id: i64) -> DomainResult<CustomerRecord> {
        let customer = self.require_by_id(id).await?;
        self.soft_delete(customer).await
    }

    /// Soft delete by mobile number
    pub async fn delete_by_mobile_number(&self, mobile_number: &str) -> DomainResult<CustomerRecord> {
        let customer = self.require_by_mobile(mobile_number).await?;
        self.soft_delete(customer).await
    }

    /// Soft delete by email address
    pub async fn delete_by_email_address(&self, email_address: &str) -> DomainResult<CustomerRecord> {
        let customer = self
            .customers
            .find_by_email_address(email_address)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Customer not found with Email Address: {}",
                    email_address
                ))
            })?;
        self.soft_delete(customer).await
    }

    /// Hard delete: removes the customer row and everything it owns.
    ///
    /// Returns the record as it was just before removal.
    pub async fn purge_by_id(&self, id: i64) -> DomainResult<CustomerRecord> {
        let record = self.get_by_id(id).await?;
        if !self.customers.delete_by_id(id).await? {
            return Err(DomainError::not_found(format!(
                "Customer not found with customerId: {}",
                id
            )));
        }
        info!(customer_id = id, "customer purged");
        Ok(record)
    }

    async fn soft_delete(&self, customer: Customer) -> DomainResult<CustomerRecord> {
        self.customers
            .set_status_by_id(customer.id, CustomerStatus::Inactive)
            .await?;
        info!(customer_id = customer.id, "customer deactivated");
        self.get_by_id(customer.id).await
    }

    async fn require_by_id(&self, id: i64) -> DomainResult<Customer> {
        self.customers.find_by_id(id).await?.ok_or_else(|| {
            DomainError::not_found(format!("Customer not found with customerId: {}", id))
        })
    }

    async fn require_by_mobile(&self, mobile_number: &str) -> DomainResult<Customer> {
        self.customers
            .find_by_mobile_number(mobile_number)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Customer not found with Mobile Number: {}",
                    mobile_number
                ))
            })
    }

    async fn hydrate(&self, customer: Customer) -> DomainResult<CustomerRecord> {
        let addresses = self.addresses.find_by_customer(customer.id).await?;
        Ok(CustomerRecord::new(customer, addresses))
    }
}

fn validate_addresses(input: &CreateCustomerInput) -> DomainResult<()> {
    if input.addresses.is_empty() {
        return Err(DomainError::validation("Addresses cannot be empty"));
    }
    for address in &input.addresses {
        if !validation::is_valid_pincode(address.pincode) {
            return Err(DomainError::validation(format!(
                "Pincode must be between {} and {}",
                validation::PINCODE_MIN,
                validation::PINCODE_MAX
            )));
        }
    }
    Ok(())
}
