use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        business::{
            BusinessDto, BusinessIdDto, BusinessStatsDto, CreateBusinessDto, UpdateBusinessDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::business::{CreateBusinessParams, UpdateBusinessParams},
        service::business::BusinessService,
        state::AppState,
    },
};

pub static BUSINESS_TAG: &str = "business";

#[utoipa::path(
    get,
    path = "/businesses",
    tag = BUSINESS_TAG,
    responses(
        (status = 200, description = "All businesses, newest first", body = Vec<BusinessDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_businesses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let businesses = BusinessService::new(&state.db, &state.activity)
        .get_all()
        .await?;

    let dtos: Vec<BusinessDto> = businesses.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/businesses",
    tag = BUSINESS_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateBusinessDto,
    responses(
        (status = 201, description = "Business created", body = BusinessDto),
        (status = 400, description = "Name, category or description missing", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a business owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_business(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateBusinessDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageBusinesses])
        .await?;
    let Json(payload) = payload?;

    let business = BusinessService::new(&state.db, &state.activity)
        .create(CreateBusinessParams::from_dto(identity.user_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(business.into_dto())))
}

#[utoipa::path(
    put,
    path = "/businesses",
    tag = BUSINESS_TAG,
    security(("bearer_auth" = [])),
    request_body = UpdateBusinessDto,
    responses(
        (status = 200, description = "Business updated", body = BusinessDto),
        (status = 400, description = "No valid fields to update", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a business owner, or not the owner of this business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_business(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateBusinessDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageBusinesses])
        .await?;
    let Json(payload) = payload?;

    let business = BusinessService::new(&state.db, &state.activity)
        .update(UpdateBusinessParams::from_dto(identity.user_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(business.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/businesses",
    tag = BUSINESS_TAG,
    security(("bearer_auth" = [])),
    request_body = BusinessIdDto,
    responses(
        (status = 200, description = "Business deleted; its events are unlinked", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a business owner, or not the owner of this business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_business(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<BusinessIdDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageBusinesses])
        .await?;
    let Json(payload) = payload?;

    BusinessService::new(&state.db, &state.activity)
        .delete(payload.id, identity.user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Business deleted successfully"))))
}

#[utoipa::path(
    get,
    path = "/business/{id}",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Business found", body = BusinessDto),
        (status = 400, description = "Invalid business ID", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_business(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let business = BusinessService::new(&state.db, &state.activity)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(business.into_dto())))
}

#[utoipa::path(
    get,
    path = "/my-businesses",
    tag = BUSINESS_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Businesses owned by the caller", body = Vec<BusinessDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a business owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_businesses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageBusinesses])
        .await?;

    let businesses = BusinessService::new(&state.db, &state.activity)
        .get_by_owner(identity.user_id)
        .await?;

    let dtos: Vec<BusinessDto> = businesses.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/my-business-stats",
    tag = BUSINESS_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Count and average rating of the caller's businesses", body = BusinessStatsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a business owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_business_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageBusinesses])
        .await?;

    let stats = BusinessService::new(&state.db, &state.activity)
        .stats(identity.user_id)
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
