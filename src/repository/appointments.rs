//! Appointments repository

use chrono::{NaiveDate, NaiveDateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::appointment::{Appointment, BookingQuery, NewAppointment},
};

#[derive(Clone)]
pub struct AppointmentsRepository {
    pool: Pool<Postgres>,
}

impl AppointmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get appointment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// List a provider's appointments with optional filters and pagination
    pub async fn list(&self, provider_id: i32, query: &BookingQuery) -> AppResult<(Vec<Appointment>, i64)> {
        let page = query.page.unwrap_or(1);
        let per_page = query.per_page.unwrap_or(50);
        let offset = (page - 1) * per_page;

        let mut conditions = vec!["provider_id = $1".to_string()];
        let mut idx = 2;

        if query.status.is_some() {
            conditions.push(format!("status = ${}", idx));
            idx += 1;
        }
        if query.start_date.is_some() {
            conditions.push(format!("scheduled_at >= ${}::date", idx));
            idx += 1;
        }
        if query.end_date.is_some() {
            conditions.push(format!("scheduled_at < ${}::date + 1", idx));
        }

        let where_clause = format!("WHERE {}", conditions.join(" AND "));

        // Parse dates once
        let start = query.start_date.as_ref()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
        let end = query.end_date.as_ref()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());

        // Count total
        let count_q = format!("SELECT COUNT(*) FROM appointments {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_q).bind(provider_id);
        if let Some(st) = query.status { count_builder = count_builder.bind(st); }
        if let Some(sd) = start { count_builder = count_builder.bind(sd); }
        if let Some(ed) = end { count_builder = count_builder.bind(ed); }
        let total = count_builder.fetch_one(&self.pool).await?;

        // Fetch rows
        let select_q = format!(
            "SELECT * FROM appointments {} ORDER BY scheduled_at LIMIT {} OFFSET {}",
            where_clause, per_page, offset
        );
        let mut builder = sqlx::query_as::<_, Appointment>(&select_q).bind(provider_id);
        if let Some(st) = query.status { builder = builder.bind(st); }
        if let Some(sd) = start { builder = builder.bind(sd); }
        if let Some(ed) = end { builder = builder.bind(ed); }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok((rows, total))
    }

    /// Slot-occupying appointments intersecting a time window, for conflict
    /// checks. The window is wider than one day so appointments spilling over
    /// from an adjacent day are caught too. `exclude_id` drops the appointment
    /// being edited so a reschedule does not collide with itself.
    pub async fn list_active_window(
        &self,
        provider_id: i32,
        from: NaiveDateTime,
        until: NaiveDateTime,
        exclude_id: Option<i32>,
    ) -> AppResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT * FROM appointments
            WHERE provider_id = $1
              AND status IN (0, 1)
              AND scheduled_at < $3
              AND scheduled_at + make_interval(mins => duration_minutes) > $2
              AND ($4::int4 IS NULL OR id <> $4)
            ORDER BY scheduled_at
            "#,
        )
        .bind(provider_id)
        .bind(from)
        .bind(until)
        .bind(exclude_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a pending appointment. The partial unique index on
    /// (provider_id, scheduled_at) over active rows resolves concurrent
    /// submissions: the loser surfaces as a slot conflict, not a 500.
    pub async fn create(&self, data: &NewAppointment) -> AppResult<Appointment> {
        let result = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (
                provider_id, service_id, customer_name, customer_contact,
                scheduled_at, duration_minutes, status, paid, notes
            ) VALUES ($1, $2, $3, $4, $5, $6, 0, FALSE, $7)
            RETURNING *
            "#,
        )
        .bind(data.provider_id)
        .bind(data.service_id)
        .bind(&data.customer_name)
        .bind(&data.customer_contact)
        .bind(data.scheduled_at)
        .bind(data.duration_minutes)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::SlotConflict(
                "Requested slot was just booked by someone else".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Update the status field
    pub async fn update_status(&self, id: i32, status: i16) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET status = $2, modif_date = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// Toggle the payment flag
    pub async fn set_paid(&self, id: i32, paid: bool) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET paid = $2, modif_date = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(paid)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// Move an appointment to a new start. Subject to the same unique index
    /// as create, so a reschedule race also loses cleanly.
    pub async fn reschedule(&self, id: i32, scheduled_at: NaiveDateTime) -> AppResult<Appointment> {
        let result = sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET scheduled_at = $2, modif_date = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(scheduled_at)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(row)) => Ok(row),
            Ok(None) => Err(AppError::NotFound(format!("Appointment {} not found", id))),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::SlotConflict(
                "Requested slot was just booked by someone else".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }
}
