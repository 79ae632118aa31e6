//! Weekly availability repository

use chrono::{NaiveTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{availability::UpdateDayTimes, enums::Weekday, WeeklyRule},
};

#[derive(Clone)]
pub struct AvailabilityRepository {
    pool: Pool<Postgres>,
}

impl AvailabilityRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List a provider's weekly rules ordered by day of week
    pub async fn get_week(&self, provider_id: i32) -> AppResult<Vec<WeeklyRule>> {
        let rows = sqlx::query_as::<_, WeeklyRule>(
            "SELECT * FROM weekly_availability WHERE provider_id = $1 ORDER BY day_of_week",
        )
        .bind(provider_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Seed the full week on first access: Monday-Friday open with the given
    /// default hours, weekend closed. Existing rows are left untouched.
    pub async fn ensure_week(
        &self,
        provider_id: i32,
        default_open: NaiveTime,
        default_close: NaiveTime,
    ) -> AppResult<Vec<WeeklyRule>> {
        for day in 0..7i16 {
            let open_by_default = Weekday::from_i16(day)
                .map(Weekday::is_weekday)
                .unwrap_or(false);
            sqlx::query(
                r#"
                INSERT INTO weekly_availability (provider_id, day_of_week, is_available, open_time, close_time)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (provider_id, day_of_week) DO NOTHING
                "#,
            )
            .bind(provider_id)
            .bind(day)
            .bind(open_by_default)
            .bind(default_open)
            .bind(default_close)
            .execute(&self.pool)
            .await?;
        }
        self.get_week(provider_id).await
    }

    /// Toggle a weekday open or closed
    pub async fn set_day_availability(
        &self,
        provider_id: i32,
        day_of_week: i16,
        is_available: bool,
    ) -> AppResult<WeeklyRule> {
        Weekday::from_i16(day_of_week)
            .ok_or_else(|| AppError::Validation(format!("Invalid day_of_week {}", day_of_week)))?;

        sqlx::query_as::<_, WeeklyRule>(
            r#"
            UPDATE weekly_availability
            SET is_available = $3, modif_date = $4
            WHERE provider_id = $1 AND day_of_week = $2
            RETURNING *
            "#,
        )
        .bind(provider_id)
        .bind(day_of_week)
        .bind(is_available)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No weekly rule for provider {} day {}",
                provider_id, day_of_week
            ))
        })
    }

    /// Edit a weekday's open/close times. Inverted or equal times are a
    /// malformed schedule and are rejected here, at write time.
    pub async fn set_day_times(
        &self,
        provider_id: i32,
        day_of_week: i16,
        data: &UpdateDayTimes,
    ) -> AppResult<WeeklyRule> {
        Weekday::from_i16(day_of_week)
            .ok_or_else(|| AppError::Validation(format!("Invalid day_of_week {}", day_of_week)))?;

        let open = NaiveTime::parse_from_str(&data.open_time, "%H:%M")
            .map_err(|_| AppError::Validation("Invalid open_time (use HH:MM)".to_string()))?;
        let close = NaiveTime::parse_from_str(&data.close_time, "%H:%M")
            .map_err(|_| AppError::Validation("Invalid close_time (use HH:MM)".to_string()))?;

        if open >= close {
            return Err(AppError::InvalidSchedule(
                "open_time must be before close_time".to_string(),
            ));
        }

        sqlx::query_as::<_, WeeklyRule>(
            r#"
            UPDATE weekly_availability
            SET open_time = $3, close_time = $4, modif_date = $5
            WHERE provider_id = $1 AND day_of_week = $2
            RETURNING *
            "#,
        )
        .bind(provider_id)
        .bind(day_of_week)
        .bind(open)
        .bind(close)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No weekly rule for provider {} day {}",
                provider_id, day_of_week
            ))
        })
    }
}
