//! Provider model (service-business account owning a schedule)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Provider record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Provider {
    pub id: i32,
    /// Display name shown on the booking page
    pub name: String,
    /// URL handle of the hosted booking page
    pub slug: String,
    pub contact_email: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}
