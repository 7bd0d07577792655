//! MySQL implementation of the OtpRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use cms_core::domain::entities::OneTimePassword;
use cms_core::errors::{DomainError, DomainResult};
use cms_core::repositories::OtpRepository;

use super::column;

/// MySQL implementation of OtpRepository
pub struct MySqlOtpRepository {
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_otp(row: &MySqlRow) -> DomainResult<OneTimePassword> {
        Ok(OneTimePassword {
            id: column(row, "otp_id")?,
            code: column(row, "otp_value")?,
            created_at: column::<DateTime<Utc>>(row, "created_date")?,
            customer_id: column(row, "customer_id")?,
        })
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<OneTimePassword>> {
        let rows = sqlx::query(
            r#"
            SELECT otp_id, otp_value, created_date, customer_id
            FROM customer_otp
            WHERE customer_id = ?
            ORDER BY otp_id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find OTP codes: {}", e)))?;

        let mut codes = Vec::with_capacity(rows.len());
        for row in rows {
            codes.push(Self::row_to_otp(&row)?);
        }

        Ok(codes)
    }
}
