//! MySQL implementation of the CustomerRepository trait.
//!
//! Customer creation is transactional: the customer row, its addresses and
//! its OTP either all commit or none do.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use cms_core::domain::entities::{Address, Customer, CustomerStatus, OneTimePassword};
use cms_core::errors::{DomainError, DomainResult};
use cms_core::repositories::CustomerRepository;
use cms_shared::types::PageQuery;

use super::{column, map_unique_violation, sort_column};

const CUSTOMER_COLUMNS: &str = "customer_id, first_name, last_name, full_name, age, \
     mobile_number, email_address, password_hash, status, created_date, updated_date";

/// MySQL implementation of CustomerRepository
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Customer entity
    fn row_to_customer(row: &MySqlRow) -> DomainResult<Customer> {
        let status: String = column(row, "status")?;
        Ok(Customer {
            id: column(row, "customer_id")?,
            first_name: column(row, "first_name")?,
            last_name: column(row, "last_name")?,
            full_name: column(row, "full_name")?,
            age: column(row, "age")?,
            mobile_number: column(row, "mobile_number")?,
            email_address: column(row, "email_address")?,
            password_hash: column(row, "password_hash")?,
            status: CustomerStatus::from_str_or_inactive(&status),
            created_at: column::<DateTime<Utc>>(row, "created_date")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_date")?,
        })
    }

    async fn find_by_column(&self, sql: &str, value: &str) -> DomainResult<Option<Customer>> {
        let result = sqlx::query(sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find customer: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_column(&self, sql: &str, value: &str) -> DomainResult<bool> {
        let row = sqlx::query(sql)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to check customer existence: {}", e))
            })?;

        let present: i8 = column(&row, "present")?;
        Ok(present == 1)
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn create(
        &self,
        mut customer: Customer,
        addresses: Vec<Address>,
        mut otp: OneTimePassword,
    ) -> DomainResult<(Customer, Vec<Address>, OneTimePassword)> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to begin transaction: {}", e)))?;

        let result = sqlx::query(
            r#"
            INSERT INTO customers (
                first_name, last_name, full_name, age, mobile_number,
                email_address, password_hash, status, created_date, updated_date
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.full_name)
        .bind(customer.age)
        .bind(&customer.mobile_number)
        .bind(&customer.email_address)
        .bind(&customer.password_hash)
        .bind(customer.status.as_str())
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, "Failed to insert customer"))?;

        customer.id = result.last_insert_id() as i64;

        let mut saved_addresses = Vec::with_capacity(addresses.len());
        for mut address in addresses {
            let result = sqlx::query(
                r#"
                INSERT INTO customer_address (
                    street, city, state, country, address_type, pincode, customer_id
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&address.street)
            .bind(&address.city)
            .bind(&address.state)
            .bind(&address.country)
            .bind(&address.address_type)
            .bind(address.pincode)
            .bind(customer.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to insert address: {}", e)))?;

            address.id = result.last_insert_id() as i64;
            address.customer_id = customer.id;
            saved_addresses.push(address);
        }

        let result = sqlx::query(
            "INSERT INTO customer_otp (otp_value, created_date, customer_id) VALUES (?, ?, ?)",
        )
        .bind(&otp.code)
        .bind(otp.created_at)
        .bind(customer.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert OTP: {}", e)))?;

        otp.id = result.last_insert_id() as i64;
        otp.customer_id = customer.id;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit transaction: {}", e)))?;

        Ok((customer, saved_addresses, otp))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Customer>> {
        let sql = format!(
            "SELECT {} FROM customers WHERE customer_id = ? LIMIT 1",
            CUSTOMER_COLUMNS
        );
        let result = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find customer: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_mobile_number(&self, mobile_number: &str) -> DomainResult<Option<Customer>> {
        let sql = format!(
            "SELECT {} FROM customers WHERE mobile_number = ? LIMIT 1",
            CUSTOMER_COLUMNS
        );
        self.find_by_column(&sql, mobile_number).await
    }

    async fn find_by_email_address(&self, email_address: &str) -> DomainResult<Option<Customer>> {
        let sql = format!(
            "SELECT {} FROM customers WHERE email_address = ? LIMIT 1",
            CUSTOMER_COLUMNS
        );
        self.find_by_column(&sql, email_address).await
    }

    async fn find_by_full_name(&self, full_name: &str) -> DomainResult<Option<Customer>> {
        let sql = format!(
            "SELECT {} FROM customers WHERE full_name = ? LIMIT 1",
            CUSTOMER_COLUMNS
        );
        self.find_by_column(&sql, full_name).await
    }

    async fn exists_by_mobile_number(&self, mobile_number: &str) -> DomainResult<bool> {
        self.exists_by_column(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE mobile_number = ?) AS present",
            mobile_number,
        )
        .await
    }

    async fn exists_by_email_address(&self, email_address: &str) -> DomainResult<bool> {
        self.exists_by_column(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE email_address = ?) AS present",
            email_address,
        )
        .await
    }

    async fn exists_by_full_name(&self, full_name: &str) -> DomainResult<bool> {
        self.exists_by_column(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE full_name = ?) AS present",
            full_name,
        )
        .await
    }

    async fn list(&self, query: &PageQuery) -> DomainResult<(Vec<Customer>, u64)> {
        let total_row = sqlx::query("SELECT COUNT(*) AS total FROM customers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to count customers: {}", e)))?;
        let total: i64 = column(&total_row, "total")?;

        // sort_column is a whitelist, so the interpolation is safe
        let sql = format!(
            "SELECT {} FROM customers ORDER BY {} DESC LIMIT ? OFFSET ?",
            CUSTOMER_COLUMNS,
            sort_column(&query.sort_by)
        );
        let rows = sqlx::query(&sql)
            .bind(query.limit_i64())
            .bind(query.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list customers: {}", e)))?;

        let mut customers = Vec::with_capacity(rows.len());
        for row in rows {
            customers.push(Self::row_to_customer(&row)?);
        }

        Ok((customers, total as u64))
    }

    async fn update(&self, mut customer: Customer) -> DomainResult<Customer> {
        customer.updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET first_name = ?, last_name = ?, full_name = ?, age = ?,
                mobile_number = ?, email_address = ?, password_hash = ?,
                status = ?, updated_date = ?
            WHERE customer_id = ?
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.full_name)
        .bind(customer.age)
        .bind(&customer.mobile_number)
        .bind(&customer.email_address)
        .bind(&customer.password_hash)
        .bind(customer.status.as_str())
        .bind(customer.updated_at)
        .bind(customer.id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Failed to update customer"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Customer not found with customerId: {}",
                customer.id
            )));
        }

        Ok(customer)
    }

    async fn update_mobile_by_id(&self, id: i64, new_mobile_number: &str) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE customers SET mobile_number = ?, updated_date = ? WHERE customer_id = ?",
        )
        .bind(new_mobile_number)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Failed to update mobile number"))?;

        require_row(result.rows_affected(), id)
    }

    async fn update_email_by_id(&self, id: i64, new_email_address: &str) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE customers SET email_address = ?, updated_date = ? WHERE customer_id = ?",
        )
        .bind(new_email_address)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Failed to update email address"))?;

        require_row(result.rows_affected(), id)
    }

    async fn update_password_by_id(&self, id: i64, password_hash: &str) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE customers SET password_hash = ?, updated_date = ? WHERE customer_id = ?",
        )
        .bind(password_hash)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update password: {}", e)))?;

        require_row(result.rows_affected(), id)
    }

    async fn set_status_by_id(&self, id: i64, status: CustomerStatus) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE customers SET status = ?, updated_date = ? WHERE customer_id = ?",
        )
        .bind(status.as_str())
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update status: {}", e)))?;

        require_row(result.rows_affected(), id)
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM customers WHERE customer_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete customer: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn require_row(rows_affected: u64, id: i64) -> DomainResult<()> {
    if rows_affected == 0 {
        return Err(DomainError::not_found(format!(
            "Customer not found with customerId: {}",
            id
        )));
    }
    Ok(())
}
