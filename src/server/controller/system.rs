use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::system::{StatsDto, SystemEventDto},
    server::state::AppState,
};

pub static SYSTEM_TAG: &str = "system";

#[utoipa::path(
    get,
    path = "/health",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    ),
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

#[utoipa::path(
    get,
    path = "/stats",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Request count and uptime since start", body = StatsDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.activity.stats().into_dto()))
}

#[utoipa::path(
    get,
    path = "/system-events",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Most recent changes, oldest first", body = Vec<SystemEventDto>)
    ),
)]
pub async fn get_system_events(State(state): State<AppState>) -> impl IntoResponse {
    let events: Vec<SystemEventDto> = state
        .activity
        .events()
        .await
        .into_iter()
        .map(|e| e.into_dto())
        .collect();

    (StatusCode::OK, Json(events))
}
