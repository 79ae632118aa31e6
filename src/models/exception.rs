//! Blocked date models (one-off closures overriding the weekly rules)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// A calendar date a provider has blocked for booking
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BlockedDate {
    pub id: i32,
    /// Owning provider ID
    pub provider_id: i32,
    /// Blocked calendar date
    pub blocked_date: NaiveDate,
    /// Reason shown to the provider (never to customers)
    pub reason: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Block-date request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBlockedDate {
    /// Date to block (YYYY-MM-DD)
    pub date: String,
    pub reason: Option<String>,
}

/// Query parameters for blocked dates
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BlockedDateQuery {
    /// Filter from this date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Filter until this date (YYYY-MM-DD)
    pub end_date: Option<String>,
}
