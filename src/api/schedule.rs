//! Schedule API endpoints (weekly rules, blocked dates, bookable slots)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        availability::{SlotsQuery, UpdateDayAvailability, UpdateDayTimes},
        exception::{BlockedDateQuery, CreateBlockedDate},
        BlockedDate, WeeklyRule,
    },
};

/// Bookable slots for one date
#[derive(Serialize, ToSchema)]
pub struct SlotsResponse {
    /// Candidate date
    pub date: NaiveDate,
    /// Whether the date accepts bookings at all
    pub bookable: bool,
    /// Slot starts (HH:MM), ascending
    pub slots: Vec<String>,
}

// ---- Weekly rules ----

/// Get a provider's weekly schedule (seeded with defaults on first access)
#[utoipa::path(
    get,
    path = "/providers/{id}/schedule",
    tag = "schedule",
    params(("id" = i32, Path, description = "Provider ID")),
    responses(
        (status = 200, description = "Seven weekly rules", body = Vec<WeeklyRule>),
        (status = 404, description = "Provider not found")
    )
)]
pub async fn get_schedule(
    State(state): State<crate::AppState>,
    Path(provider_id): Path<i32>,
) -> AppResult<Json<Vec<WeeklyRule>>> {
    let rules = state.services.schedule.get_week(provider_id).await?;
    Ok(Json(rules))
}

/// Toggle one weekday open or closed
#[utoipa::path(
    put,
    path = "/providers/{id}/schedule/{day}/availability",
    tag = "schedule",
    params(
        ("id" = i32, Path, description = "Provider ID"),
        ("day" = i16, Path, description = "Day of week (0=Sunday)")
    ),
    request_body = UpdateDayAvailability,
    responses(
        (status = 200, description = "Updated rule", body = WeeklyRule),
        (status = 400, description = "Invalid day of week")
    )
)]
pub async fn set_day_availability(
    State(state): State<crate::AppState>,
    Path((provider_id, day)): Path<(i32, i16)>,
    Json(data): Json<UpdateDayAvailability>,
) -> AppResult<Json<WeeklyRule>> {
    let rule = state
        .services
        .schedule
        .set_day_availability(provider_id, day, data.is_available)
        .await?;
    Ok(Json(rule))
}

/// Edit one weekday's opening hours
#[utoipa::path(
    put,
    path = "/providers/{id}/schedule/{day}/times",
    tag = "schedule",
    params(
        ("id" = i32, Path, description = "Provider ID"),
        ("day" = i16, Path, description = "Day of week (0=Sunday)")
    ),
    request_body = UpdateDayTimes,
    responses(
        (status = 200, description = "Updated rule", body = WeeklyRule),
        (status = 400, description = "Malformed times or open_time >= close_time")
    )
)]
pub async fn set_day_times(
    State(state): State<crate::AppState>,
    Path((provider_id, day)): Path<(i32, i16)>,
    Json(data): Json<UpdateDayTimes>,
) -> AppResult<Json<WeeklyRule>> {
    let rule = state
        .services
        .schedule
        .set_day_times(provider_id, day, &data)
        .await?;
    Ok(Json(rule))
}

// ---- Blocked dates ----

/// List a provider's blocked dates
#[utoipa::path(
    get,
    path = "/providers/{id}/blocked-dates",
    tag = "schedule",
    params(
        ("id" = i32, Path, description = "Provider ID"),
        BlockedDateQuery
    ),
    responses(
        (status = 200, description = "Blocked dates", body = Vec<BlockedDate>)
    )
)]
pub async fn list_blocked_dates(
    State(state): State<crate::AppState>,
    Path(provider_id): Path<i32>,
    Query(query): Query<BlockedDateQuery>,
) -> AppResult<Json<Vec<BlockedDate>>> {
    let start = query.start_date.as_ref()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
    let end = query.end_date.as_ref()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
    let blocked = state.services.schedule.list_blocked(provider_id, start, end).await?;
    Ok(Json(blocked))
}

/// Block a date
#[utoipa::path(
    post,
    path = "/providers/{id}/blocked-dates",
    tag = "schedule",
    params(("id" = i32, Path, description = "Provider ID")),
    request_body = CreateBlockedDate,
    responses(
        (status = 201, description = "Date blocked", body = BlockedDate),
        (status = 409, description = "Date already blocked")
    )
)]
pub async fn create_blocked_date(
    State(state): State<crate::AppState>,
    Path(provider_id): Path<i32>,
    Json(data): Json<CreateBlockedDate>,
) -> AppResult<(StatusCode, Json<BlockedDate>)> {
    let blocked = state.services.schedule.block_date(provider_id, &data).await?;
    Ok((StatusCode::CREATED, Json(blocked)))
}

/// Unblock a date
#[utoipa::path(
    delete,
    path = "/blocked-dates/{id}",
    tag = "schedule",
    params(("id" = i32, Path, description = "Blocked date ID")),
    responses(
        (status = 204, description = "Date unblocked"),
        (status = 404, description = "Blocked date not found")
    )
)]
pub async fn delete_blocked_date(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.schedule.unblock_date(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- Slots ----

/// Bookable slots for a date
#[utoipa::path(
    get,
    path = "/providers/{id}/slots",
    tag = "schedule",
    params(
        ("id" = i32, Path, description = "Provider ID"),
        SlotsQuery
    ),
    responses(
        (status = 200, description = "Slot grid for the date", body = SlotsResponse),
        (status = 400, description = "Malformed date")
    )
)]
pub async fn list_slots(
    State(state): State<crate::AppState>,
    Path(provider_id): Path<i32>,
    Query(query): Query<SlotsQuery>,
) -> AppResult<Json<SlotsResponse>> {
    let (date, bookable, slots) = state
        .services
        .schedule
        .day_slots(provider_id, &query.date, query.granularity)
        .await?;
    Ok(Json(SlotsResponse {
        date,
        bookable,
        slots: slots.iter().map(|t| t.format("%H:%M").to_string()).collect(),
    }))
}
