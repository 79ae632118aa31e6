//! Provider booking-page endpoints (profile header, service list)

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{Provider, ServiceOffering},
};

/// Get a provider's public page data
#[utoipa::path(
    get,
    path = "/providers/{id}",
    tag = "providers",
    params(("id" = i32, Path, description = "Provider ID")),
    responses(
        (status = 200, description = "Provider data", body = Provider),
        (status = 404, description = "Provider not found")
    )
)]
pub async fn get_provider(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Provider>> {
    let provider = state.services.catalog.get_provider(id).await?;
    Ok(Json(provider))
}

/// List a provider's active services
#[utoipa::path(
    get,
    path = "/providers/{id}/services",
    tag = "providers",
    params(("id" = i32, Path, description = "Provider ID")),
    responses(
        (status = 200, description = "Active services", body = Vec<ServiceOffering>),
        (status = 404, description = "Provider not found")
    )
)]
pub async fn list_services(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<ServiceOffering>>> {
    let services = state.services.catalog.list_services(id).await?;
    Ok(Json(services))
}

/// Get a single service offering
#[utoipa::path(
    get,
    path = "/services/{id}",
    tag = "providers",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service offering", body = ServiceOffering),
        (status = 404, description = "Service not found")
    )
)]
pub async fn get_service(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ServiceOffering>> {
    let service = state.services.catalog.get_service(id).await?;
    Ok(Json(service))
}
