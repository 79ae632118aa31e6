//! Booking service: validation pipeline and appointment lifecycle

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use validator::Validate;

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::{
        appointment::{
            Appointment, AppointmentStatus, BookingQuery, CreateBooking, NewAppointment,
            RescheduleBooking,
        },
    },
    repository::Repository,
    scheduling,
};

#[derive(Clone)]
pub struct BookingService {
    repository: Repository,
    config: BookingConfig,
}

impl BookingService {
    pub fn new(repository: Repository, config: BookingConfig) -> Self {
        Self { repository, config }
    }

    fn default_open(&self) -> NaiveTime {
        NaiveTime::parse_from_str(&self.config.default_open, "%H:%M")
            .unwrap_or_else(|_| NaiveTime::from_hms_opt(9, 0, 0).unwrap())
    }

    fn default_close(&self) -> NaiveTime {
        NaiveTime::parse_from_str(&self.config.default_close, "%H:%M")
            .unwrap_or_else(|_| NaiveTime::from_hms_opt(17, 0, 0).unwrap())
    }

    /// Submit a customer booking request.
    ///
    /// Validates the requested date against the provider's availability, the
    /// requested time against the slot grid, and the interval against existing
    /// pending/accepted appointments, then inserts with status pending. A
    /// concurrent submission for the same slot loses at the unique index and
    /// comes back as a slot conflict.
    pub async fn submit(&self, data: CreateBooking) -> AppResult<Appointment> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let provider = self.repository.providers.get_by_id(data.provider_id).await?;
        let service = self.repository.services.get_by_id(data.service_id).await?;
        if service.provider_id != provider.id {
            return Err(AppError::BadRequest(
                "Service does not belong to this provider".to_string(),
            ));
        }
        if !service.is_active {
            return Err(AppError::BadRequest("Service is not bookable".to_string()));
        }

        let (date, time) = parse_date_time(&data.date, &data.time)?;
        let duration_minutes = service
            .duration_minutes
            .unwrap_or(self.config.slot_granularity_minutes as i32);

        self.validate_slot(provider.id, date, time, duration_minutes, None)
            .await?;

        let appointment = self
            .repository
            .appointments
            .create(&NewAppointment {
                provider_id: provider.id,
                service_id: service.id,
                customer_name: data.customer_name,
                customer_contact: data.customer_contact,
                scheduled_at: NaiveDateTime::new(date, time),
                duration_minutes,
                notes: data.notes,
            })
            .await?;

        tracing::info!(
            appointment_id = appointment.id,
            provider_id = provider.id,
            scheduled_at = %appointment.scheduled_at,
            "booking request created"
        );
        Ok(appointment)
    }

    /// Move an existing appointment to a new slot, re-running the full
    /// validation pipeline with the appointment's own row excluded from the
    /// conflict set.
    pub async fn reschedule(&self, id: i32, data: &RescheduleBooking) -> AppResult<Appointment> {
        let appointment = self.repository.appointments.get_by_id(id).await?;
        let status = AppointmentStatus::from_i16(appointment.status)
            .ok_or_else(|| AppError::Internal(format!("Appointment {} has corrupt status", id)))?;
        if !status.is_active() {
            return Err(AppError::InvalidTransition(format!(
                "Cannot reschedule a {} appointment",
                status
            )));
        }

        let (date, time) = parse_date_time(&data.date, &data.time)?;
        self.validate_slot(
            appointment.provider_id,
            date,
            time,
            appointment.duration_minutes,
            Some(id),
        )
        .await?;

        self.repository
            .appointments
            .reschedule(id, NaiveDateTime::new(date, time))
            .await
    }

    /// Provider-driven status transition
    pub async fn update_status(&self, id: i32, target: i16) -> AppResult<Appointment> {
        let appointment = self.repository.appointments.get_by_id(id).await?;
        let current = AppointmentStatus::from_i16(appointment.status)
            .ok_or_else(|| AppError::Internal(format!("Appointment {} has corrupt status", id)))?;
        let next = AppointmentStatus::from_i16(target)
            .ok_or_else(|| AppError::Validation(format!("Invalid status value {}", target)))?;

        if !current.can_transition_to(next) {
            return Err(AppError::InvalidTransition(format!(
                "Cannot move a {} appointment to {}",
                current, next
            )));
        }

        self.repository.appointments.update_status(id, next.into()).await
    }

    /// Toggle the payment flag (independent of status)
    pub async fn set_paid(&self, id: i32, paid: bool) -> AppResult<Appointment> {
        // Verify appointment exists for a clean 404
        self.repository.appointments.get_by_id(id).await?;
        self.repository.appointments.set_paid(id, paid).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Appointment> {
        self.repository.appointments.get_by_id(id).await
    }

    /// List a provider's appointments
    pub async fn list_for_provider(
        &self,
        provider_id: i32,
        query: &BookingQuery,
    ) -> AppResult<(Vec<Appointment>, i64)> {
        self.repository.providers.get_by_id(provider_id).await?;
        self.repository.appointments.list(provider_id, query).await
    }

    /// The read side of the read-check-write sequence: date bookable, time on
    /// the slot grid, interval free of overlaps. The write side is backstopped
    /// by the unique index.
    async fn validate_slot(
        &self,
        provider_id: i32,
        date: NaiveDate,
        time: NaiveTime,
        duration_minutes: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<()> {
        let today = Utc::now().date_naive();

        let rules = self
            .repository
            .availability
            .ensure_week(provider_id, self.default_open(), self.default_close())
            .await?;
        let blocked = self
            .repository
            .exceptions
            .list(provider_id, Some(date), Some(date))
            .await?;

        if !scheduling::is_date_bookable(date, today, &rules, &blocked) {
            return Err(AppError::DateUnavailable(format!(
                "{} is not open for booking",
                date
            )));
        }

        let slots = scheduling::bookable_slots(
            date,
            today,
            &rules,
            &blocked,
            self.config.slot_granularity_minutes,
        );
        if !slots.contains(&time) {
            return Err(AppError::SlotNotOffered(format!(
                "{} is not an offered slot on {}",
                time.format("%H:%M"),
                date
            )));
        }

        let start = NaiveDateTime::new(date, time);
        // One day of margin on both sides catches appointments spilling over
        // from an adjacent day.
        let window_from = start - Duration::days(1);
        let window_until = start + Duration::days(1);
        let existing = self
            .repository
            .appointments
            .list_active_window(provider_id, window_from, window_until, exclude_id)
            .await?;
        let intervals: Vec<(NaiveDateTime, i32)> = existing
            .iter()
            .map(|a| (a.scheduled_at, a.duration_minutes))
            .collect();

        if scheduling::has_conflict(start, duration_minutes, &intervals) {
            return Err(AppError::SlotConflict(format!(
                "Slot {} on {} is already taken",
                time.format("%H:%M"),
                date
            )));
        }

        Ok(())
    }
}

fn parse_date_time(date: &str, time: &str) -> AppResult<(NaiveDate, NaiveTime)> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date (use YYYY-MM-DD)".to_string()))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid time (use HH:MM)".to_string()))?;
    Ok((date, time))
}
