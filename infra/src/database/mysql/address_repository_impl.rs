//! MySQL implementation of the AddressRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use cms_core::domain::entities::Address;
use cms_core::errors::{DomainError, DomainResult};
use cms_core::repositories::AddressRepository;

use super::column;

/// MySQL implementation of AddressRepository
pub struct MySqlAddressRepository {
    pool: MySqlPool,
}

impl MySqlAddressRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_address(row: &MySqlRow) -> DomainResult<Address> {
        Ok(Address {
            id: column(row, "address_id")?,
            street: column(row, "street")?,
            city: column(row, "city")?,
            state: column(row, "state")?,
            country: column(row, "country")?,
            address_type: column(row, "address_type")?,
            pincode: column(row, "pincode")?,
            customer_id: column(row, "customer_id")?,
        })
    }
}

#[async_trait]
impl AddressRepository for MySqlAddressRepository {
    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<Address>> {
        let rows = sqlx::query(
            r#"
            SELECT address_id, street, city, state, country, address_type, pincode, customer_id
            FROM customer_address
            WHERE customer_id = ?
            ORDER BY address_id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find addresses: {}", e)))?;

        let mut addresses = Vec::with_capacity(rows.len());
        for row in rows {
            addresses.push(Self::row_to_address(&row)?);
        }

        Ok(addresses)
    }
}
