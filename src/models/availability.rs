//! Weekly availability models (one rule per provider per weekday)

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// WeeklyRule
// ---------------------------------------------------------------------------

/// A provider's recurring availability for one day of the week
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WeeklyRule {
    pub id: i32,
    /// Owning provider ID
    pub provider_id: i32,
    /// Day of week (0=Sunday, 6=Saturday)
    pub day_of_week: i16,
    /// Whether the day is open for booking at all
    pub is_available: bool,
    /// Opening time, meaningful only when available
    pub open_time: NaiveTime,
    /// Closing time, meaningful only when available
    pub close_time: NaiveTime,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Toggle-availability request for one weekday
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDayAvailability {
    pub is_available: bool,
}

/// Edit-times request for one weekday
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDayTimes {
    /// Opening time (HH:MM)
    pub open_time: String,
    /// Closing time (HH:MM)
    pub close_time: String,
}

/// Query parameters for the bookable-slots endpoint
#[derive(Debug, Deserialize, utoipa::IntoParams, ToSchema)]
pub struct SlotsQuery {
    /// Candidate date (YYYY-MM-DD)
    pub date: String,
    /// Slot grid step in minutes; defaults to the configured granularity
    pub granularity: Option<u32>,
}
