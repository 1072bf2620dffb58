use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{AuthResponseDto, LoginDto, RegisterDto},
    },
    server::{
        error::AppError,
        middleware::auth::{bearer_token, AuthGuard},
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and signed in", body = AuthResponseDto),
        (status = 400, description = "Missing fields, unknown role or password too long", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let (user, token) = AuthService::new(&state.db, &state.tokens, &state.passwords)
        .register(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            user: user.into_dto(),
            token,
            message: Some("User registered successfully".to_string()),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in with a new session", body = AuthResponseDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let (user, token) = AuthService::new(&state.db, &state.tokens, &state.passwords)
        .login(payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            user: user.into_dto(),
            token,
            message: None,
        }),
    ))
}

/// Revokes the presented session.
///
/// The token does not have to be valid; logging out twice, or with an expired token,
/// still succeeds.
#[utoipa::path(
    post,
    path = "/logout",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session revoked", body = MessageDto),
        (status = 400, description = "Missing or malformed Authorization header", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let token = bearer_token(&headers).ok_or_else(|| {
        AppError::BadRequest("Authorization header with Bearer token is required".to_string())
    })?;

    AuthService::new(&state.db, &state.tokens, &state.passwords)
        .logout(token)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out successfully"))))
}

#[utoipa::path(
    delete,
    path = "/account",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account and all of its data deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    AuthService::new(&state.db, &state.tokens, &state.passwords)
        .delete_account(identity)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Account deleted successfully"))))
}
