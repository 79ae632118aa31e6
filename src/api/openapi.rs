//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{bookings, health, providers, schedule};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookline API",
        version = "0.9.0",
        description = "Service Booking Platform REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Providers
        providers::get_provider,
        providers::list_services,
        providers::get_service,
        // Schedule
        schedule::get_schedule,
        schedule::set_day_availability,
        schedule::set_day_times,
        schedule::list_blocked_dates,
        schedule::create_blocked_date,
        schedule::delete_blocked_date,
        schedule::list_slots,
        // Bookings
        bookings::create_booking,
        bookings::get_booking,
        bookings::list_bookings,
        bookings::update_booking_status,
        bookings::update_booking_paid,
        bookings::reschedule_booking,
    ),
    components(
        schemas(
            // Providers
            crate::models::provider::Provider,
            crate::models::service::ServiceOffering,
            // Schedule
            crate::models::availability::WeeklyRule,
            crate::models::availability::UpdateDayAvailability,
            crate::models::availability::UpdateDayTimes,
            crate::models::exception::BlockedDate,
            crate::models::exception::CreateBlockedDate,
            schedule::SlotsResponse,
            // Bookings
            crate::models::appointment::Appointment,
            crate::models::appointment::AppointmentStatus,
            crate::models::appointment::CreateBooking,
            crate::models::appointment::RescheduleBooking,
            crate::models::appointment::UpdateBookingStatus,
            crate::models::appointment::UpdateBookingPaid,
            bookings::BookingListResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "providers", description = "Provider booking pages and service catalog"),
        (name = "schedule", description = "Weekly availability, blocked dates and slots"),
        (name = "bookings", description = "Booking requests and lifecycle")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
