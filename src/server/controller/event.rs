use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        event::{CreateEventDto, EventDto, EventFilterParams, EventIdDto, UpdateEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::{CreateEventParams, UpdateEventParams},
        service::event::EventService,
        state::AppState,
    },
};

pub static EVENT_TAG: &str = "event";

#[utoipa::path(
    get,
    path = "/business-events",
    tag = EVENT_TAG,
    params(EventFilterParams),
    responses(
        (status = 200, description = "Upcoming events, soonest first", body = Vec<EventDto>),
        (status = 400, description = "Invalid business_id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    filter: Result<Query<EventFilterParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(filter) = filter?;

    let events = EventService::new(&state.db, &state.activity)
        .get_upcoming(filter.business_id)
        .await?;

    let dtos: Vec<EventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Creates an event owned by the caller.
///
/// Business owners may link the event to one of their businesses with `business_id`; for
/// event owners the field is ignored.
#[utoipa::path(
    post,
    path = "/business-events",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Title or event_date missing or malformed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller cannot manage events, or linked business is not theirs", body = ErrorDto),
        (status = 404, description = "Linked business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateEventDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageEvents])
        .await?;
    let Json(payload) = payload?;

    let params = CreateEventParams::from_dto(identity.user_id, payload)?;
    let event = EventService::new(&state.db, &state.activity)
        .create(identity.role, params)
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

#[utoipa::path(
    put,
    path = "/business-events",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "No valid fields to update or malformed event_date", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller cannot manage events, or does not own this one", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateEventDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageEvents])
        .await?;
    let Json(payload) = payload?;

    let event = EventService::new(&state.db, &state.activity)
        .update(UpdateEventParams::from_dto(identity.user_id, payload)?)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/business-events",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    request_body = EventIdDto,
    responses(
        (status = 200, description = "Event and its bookings deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller cannot manage events, or does not own this one", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<EventIdDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageEvents])
        .await?;
    let Json(payload) = payload?;

    EventService::new(&state.db, &state.activity)
        .delete(payload.id, identity.user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Event deleted successfully"))))
}

#[utoipa::path(
    get,
    path = "/event/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventDto),
        (status = 400, description = "Invalid event ID", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let event = EventService::new(&state.db, &state.activity)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

#[utoipa::path(
    get,
    path = "/my-events",
    tag = EVENT_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All events owned by the caller, past ones included", body = Vec<EventDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller cannot manage events", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageEvents])
        .await?;

    let events = EventService::new(&state.db, &state.activity)
        .get_by_owner(identity.user_id)
        .await?;

    let dtos: Vec<EventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
