//! Schedule service (weekly rules, blocked dates, slot listing)

use chrono::{NaiveDate, NaiveTime, Utc};

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::{availability::UpdateDayTimes, exception::CreateBlockedDate, BlockedDate, WeeklyRule},
    repository::Repository,
    scheduling,
};

#[derive(Clone)]
pub struct ScheduleService {
    repository: Repository,
    config: BookingConfig,
}

impl ScheduleService {
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

    // ---- Weekly rules ----

    /// Get the provider's seven weekly rules, seeding defaults on first access
    pub async fn get_week(&self, provider_id: i32) -> AppResult<Vec<WeeklyRule>> {
        self.repository.providers.get_by_id(provider_id).await?;
        self.repository
            .availability
            .ensure_week(provider_id, self.default_open(), self.default_close())
            .await
    }

    /// Toggle one weekday open or closed
    pub async fn set_day_availability(
        &self,
        provider_id: i32,
        day_of_week: i16,
        is_available: bool,
    ) -> AppResult<WeeklyRule> {
        // Seed first so toggling works even before the schedule was ever read
        self.get_week(provider_id).await?;
        self.repository
            .availability
            .set_day_availability(provider_id, day_of_week, is_available)
            .await
    }

    /// Edit one weekday's opening hours
    pub async fn set_day_times(
        &self,
        provider_id: i32,
        day_of_week: i16,
        data: &UpdateDayTimes,
    ) -> AppResult<WeeklyRule> {
        self.get_week(provider_id).await?;
        self.repository
            .availability
            .set_day_times(provider_id, day_of_week, data)
            .await
    }

    // ---- Blocked dates ----

    pub async fn list_blocked(
        &self,
        provider_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AppResult<Vec<BlockedDate>> {
        self.repository.providers.get_by_id(provider_id).await?;
        self.repository.exceptions.list(provider_id, start_date, end_date).await
    }

    pub async fn block_date(&self, provider_id: i32, data: &CreateBlockedDate) -> AppResult<BlockedDate> {
        self.repository.providers.get_by_id(provider_id).await?;
        self.repository.exceptions.create(provider_id, data).await
    }

    pub async fn unblock_date(&self, id: i32) -> AppResult<()> {
        self.repository.exceptions.delete(id).await
    }

    // ---- Slots ----

    /// Bookable slot starts for a candidate date. An empty list is a normal
    /// outcome (closed, blocked or past date), not an error.
    pub async fn day_slots(
        &self,
        provider_id: i32,
        date: &str,
        granularity: Option<u32>,
    ) -> AppResult<(NaiveDate, bool, Vec<NaiveTime>)> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid date (use YYYY-MM-DD)".to_string()))?;
        let granularity = granularity.unwrap_or(self.config.slot_granularity_minutes);
        if granularity == 0 {
            return Err(AppError::Validation("granularity must be positive".to_string()));
        }

        let rules = self.get_week(provider_id).await?;
        let blocked = self
            .repository
            .exceptions
            .list(provider_id, Some(date), Some(date))
            .await?;

        let today = Utc::now().date_naive();
        let bookable = scheduling::is_date_bookable(date, today, &rules, &blocked);
        let slots = scheduling::bookable_slots(date, today, &rules, &blocked, granularity);
        Ok((date, bookable, slots))
    }
}
