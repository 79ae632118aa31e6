//! Booking endpoints (customer submission, provider management)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::appointment::{
        Appointment, BookingQuery, CreateBooking, RescheduleBooking, UpdateBookingPaid,
        UpdateBookingStatus,
    },
};

/// Paginated booking list
#[derive(Serialize, ToSchema)]
pub struct BookingListResponse {
    pub items: Vec<Appointment>,
    pub total: i64,
}

/// Submit a booking request (customer-facing)
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created as pending", body = Appointment),
        (status = 404, description = "Provider or service not found"),
        (status = 409, description = "Slot already taken"),
        (status = 422, description = "Date closed or time not offered")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    let appointment = state.services.bookings.submit(data).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Get a booking by ID
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking", body = Appointment),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.bookings.get(id).await?;
    Ok(Json(appointment))
}

/// List a provider's bookings
#[utoipa::path(
    get,
    path = "/providers/{id}/bookings",
    tag = "bookings",
    params(
        ("id" = i32, Path, description = "Provider ID"),
        BookingQuery
    ),
    responses(
        (status = 200, description = "Bookings", body = BookingListResponse),
        (status = 404, description = "Provider not found")
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    Path(provider_id): Path<i32>,
    Query(query): Query<BookingQuery>,
) -> AppResult<Json<BookingListResponse>> {
    let (items, total) = state
        .services
        .bookings
        .list_for_provider(provider_id, &query)
        .await?;
    Ok(Json(BookingListResponse { items, total }))
}

/// Accept, reject or complete a booking
#[utoipa::path(
    put,
    path = "/bookings/{id}/status",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingStatus,
    responses(
        (status = 200, description = "Updated booking", body = Appointment),
        (status = 404, description = "Booking not found"),
        (status = 422, description = "Transition not allowed")
    )
)]
pub async fn update_booking_status(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBookingStatus>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.bookings.update_status(id, data.status).await?;
    Ok(Json(appointment))
}

/// Toggle the payment flag
#[utoipa::path(
    put,
    path = "/bookings/{id}/paid",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingPaid,
    responses(
        (status = 200, description = "Updated booking", body = Appointment),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn update_booking_paid(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBookingPaid>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.bookings.set_paid(id, data.paid).await?;
    Ok(Json(appointment))
}

/// Reschedule a booking to a new slot
#[utoipa::path(
    put,
    path = "/bookings/{id}/schedule",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = RescheduleBooking,
    responses(
        (status = 200, description = "Rescheduled booking", body = Appointment),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "New slot already taken"),
        (status = 422, description = "Date closed, time not offered, or booking is terminal")
    )
)]
pub async fn reschedule_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<RescheduleBooking>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.bookings.reschedule(id, &data).await?;
    Ok(Json(appointment))
}
