//! Appointment models (customer booking requests and their lifecycle)

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

// ---------------------------------------------------------------------------
// AppointmentStatus
// ---------------------------------------------------------------------------

/// Appointment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum AppointmentStatus {
    Pending = 0,
    Accepted = 1,
    Rejected = 2,
    Completed = 3,
}

impl AppointmentStatus {
    /// Parse a stored status value
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(AppointmentStatus::Pending),
            1 => Some(AppointmentStatus::Accepted),
            2 => Some(AppointmentStatus::Rejected),
            3 => Some(AppointmentStatus::Completed),
            _ => None,
        }
    }

    /// Pending and accepted appointments occupy their slot
    pub fn is_active(self) -> bool {
        matches!(self, AppointmentStatus::Pending | AppointmentStatus::Accepted)
    }

    /// Provider-driven transitions: pending -> accepted|rejected,
    /// accepted -> completed|rejected; rejected and completed are terminal.
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        use AppointmentStatus::*;
        matches!(
            (self, next),
            (Pending, Accepted) | (Pending, Rejected) | (Accepted, Completed) | (Accepted, Rejected)
        )
    }
}

impl From<AppointmentStatus> for i16 {
    fn from(s: AppointmentStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Accepted => "accepted",
            AppointmentStatus::Rejected => "rejected",
            AppointmentStatus::Completed => "completed",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Appointment
// ---------------------------------------------------------------------------

/// Appointment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: i32,
    /// Owning provider ID
    pub provider_id: i32,
    /// Booked service ID
    pub service_id: i32,
    /// Customer display name
    pub customer_name: String,
    /// Customer phone or email
    pub customer_contact: String,
    /// Appointment start (provider-local date and time)
    pub scheduled_at: NaiveDateTime,
    /// Appointment length in minutes
    pub duration_minutes: i32,
    /// Status (0=pending, 1=accepted, 2=rejected, 3=completed)
    pub status: i16,
    /// Payment flag, independent of status
    pub paid: bool,
    pub notes: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Validated insert record, built by the booking service after the
/// availability and conflict checks have passed
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub provider_id: i32,
    pub service_id: i32,
    pub customer_name: String,
    pub customer_contact: String,
    pub scheduled_at: NaiveDateTime,
    pub duration_minutes: i32,
    pub notes: Option<String>,
}

/// Customer booking submission
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    pub provider_id: i32,
    pub service_id: i32,
    /// Requested date (YYYY-MM-DD)
    pub date: String,
    /// Requested slot start (HH:MM)
    pub time: String,
    #[validate(length(min = 1, max = 200))]
    pub customer_name: String,
    #[validate(length(min = 3, max = 200))]
    pub customer_contact: String,
    pub notes: Option<String>,
}

/// Reschedule request for an existing appointment
#[derive(Debug, Deserialize, ToSchema)]
pub struct RescheduleBooking {
    /// New date (YYYY-MM-DD)
    pub date: String,
    /// New slot start (HH:MM)
    pub time: String,
}

/// Status transition request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatus {
    /// Target status (1=accepted, 2=rejected, 3=completed)
    pub status: i16,
}

/// Payment flag request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingPaid {
    pub paid: bool,
}

/// Query parameters for a provider's bookings
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BookingQuery {
    /// Filter by status value
    pub status: Option<i16>,
    /// Filter from this date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Filter until this date (YYYY-MM-DD)
    pub end_date: Option<String>,
    /// Page number (1-based)
    pub page: Option<i64>,
    /// Items per page
    pub per_page: Option<i64>,
}
