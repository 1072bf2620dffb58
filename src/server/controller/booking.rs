use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{
            BookingCreatedDto, BookingDto, BookingIdDto, CreateBookingDto, UpdateBookingDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::CreateBookingParams,
        service::booking::BookingService,
        state::AppState,
    },
};

pub static BOOKING_TAG: &str = "booking";

#[utoipa::path(
    post,
    path = "/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created as pending", body = BookingCreatedDto),
        (status = 400, description = "Missing fields or fewer than one ticket", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let booking = BookingService::new(&state.db, &state.activity)
        .create(CreateBookingParams::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedDto {
            booking: booking.into_dto(),
            message: "Booking created successfully".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/bookings",
    tag = BOOKING_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bookings for the caller's events, newest first", body = Vec<BookingDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let bookings = BookingService::new(&state.db, &state.activity)
        .get_for_event_owner(identity.user_id)
        .await?;

    let dtos: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    put,
    path = "/bookings",
    tag = BOOKING_TAG,
    security(("bearer_auth" = [])),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Booking status updated", body = BookingDto),
        (status = 400, description = "Missing id or unknown status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Booked event belongs to someone else", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateBookingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Json(payload) = payload?;

    let booking = BookingService::new(&state.db, &state.activity)
        .update_status(payload.id, identity.user_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/bookings",
    tag = BOOKING_TAG,
    security(("bearer_auth" = [])),
    request_body = BookingIdDto,
    responses(
        (status = 200, description = "Booking deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Booked event belongs to someone else", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<BookingIdDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Json(payload) = payload?;

    BookingService::new(&state.db, &state.activity)
        .delete(payload.id, identity.user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Booking deleted successfully"))))
}
