use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{bearer_token, AuthGuard, Permission},
        model::{session::Identity, user::User},
        service::{session::SessionService, token::TokenSigner},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod bearer;
mod require;

const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

fn signer() -> TokenSigner {
    TokenSigner::new(SECRET, Duration::hours(24))
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Creates a user with `role` and returns headers carrying a live session for them.
async fn signed_in(
    db: &DatabaseConnection,
    signer: &TokenSigner,
    role: Role,
) -> Result<(User, HeaderMap), AppError> {
    let entity = factory::create_user_with_role(db, role.as_str()).await?;
    let user = User::from_entity(entity)?;
    let token = SessionService::new(db, signer).issue(&user).await?;

    Ok((user, bearer_headers(&token)))
}

fn assert_denied(result: Result<Identity, AppError>) {
    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied { .. })) => {}
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }
}

fn assert_unauthenticated(result: Result<Identity, AppError>) {
    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied { .. })) => {
            panic!("Expected 401-class error, got AccessDenied")
        }
        Err(AppError::AuthErr(_)) => {}
        other => panic!("Expected auth error, got: {:?}", other),
    }
}
