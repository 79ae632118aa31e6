//! Service offering model (catalog entries bookable by customers)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Service offering record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ServiceOffering {
    pub id: i32,
    /// Owning provider ID
    pub provider_id: i32,
    /// Service name
    pub name: String,
    pub description: Option<String>,
    /// Appointment duration; falls back to the slot granularity when absent
    pub duration_minutes: Option<i32>,
    pub price_cents: Option<i32>,
    /// Inactive services are hidden from the booking page
    pub is_active: bool,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}
