//! Blocked dates repository

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{exception::CreateBlockedDate, BlockedDate},
};

#[derive(Clone)]
pub struct BlockedDatesRepository {
    pool: Pool<Postgres>,
}

impl BlockedDatesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List a provider's blocked dates, optionally bounded by a date range
    pub async fn list(
        &self,
        provider_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AppResult<Vec<BlockedDate>> {
        let mut conditions = vec!["provider_id = $1".to_string()];
        let mut idx = 2;

        if start_date.is_some() {
            conditions.push(format!("blocked_date >= ${}", idx));
            idx += 1;
        }
        if end_date.is_some() {
            conditions.push(format!("blocked_date <= ${}", idx));
        }

        let query = format!(
            "SELECT * FROM blocked_dates WHERE {} ORDER BY blocked_date",
            conditions.join(" AND ")
        );

        let mut builder = sqlx::query_as::<_, BlockedDate>(&query).bind(provider_id);
        if let Some(sd) = start_date { builder = builder.bind(sd); }
        if let Some(ed) = end_date { builder = builder.bind(ed); }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Block a date. Each date can only be blocked once per provider.
    pub async fn create(&self, provider_id: i32, data: &CreateBlockedDate) -> AppResult<BlockedDate> {
        let date = NaiveDate::parse_from_str(&data.date, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid date (use YYYY-MM-DD)".to_string()))?;

        let result = sqlx::query_as::<_, BlockedDate>(
            "INSERT INTO blocked_dates (provider_id, blocked_date, reason) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(provider_id)
        .bind(date)
        .bind(&data.reason)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::Conflict(
                format!("Date {} is already blocked", date),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Unblock a date by row ID
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM blocked_dates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Blocked date {} not found", id)));
        }
        Ok(())
    }
}
