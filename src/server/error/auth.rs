use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carries no `Authorization: Bearer <token>` header, or it is malformed.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing or malformed bearer token")]
    MissingBearerToken,

    /// No live session row matches the presented token.
    ///
    /// Covers unknown, revoked and expired sessions alike. Results in a 401
    /// Unauthorized response.
    #[error("No live session for presented token")]
    InvalidSession,

    /// Token header names an algorithm other than HS256 (including `none`).
    #[error("Token signed with unexpected algorithm {0}")]
    AlgorithmMismatch(String),

    /// Signature, expiry or claim decoding failed.
    #[error("Token verification failed: {0}")]
    InvalidToken(String),

    /// The token's `user_id` claim differs from the user owning the session row.
    #[error("Token user {claim_user_id} does not match session user {session_user_id}")]
    ClaimsMismatch {
        claim_user_id: i32,
        session_user_id: i32,
    },

    /// Login with an unknown email or a wrong password.
    ///
    /// Both cases share one message so callers cannot probe for accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated user lacks the role a route requires.
    ///
    /// Results in a 403 Forbidden response. The reason is logged, not returned.
    #[error("User {user_id} denied access: {reason}")]
    AccessDenied { user_id: i32, reason: String },
}

/// Converts authentication errors into HTTP responses.
///
/// Token and session failures collapse into a single 401 "Unauthorized" so that a caller
/// cannot tell an expired session from a forged one. The underlying cause is logged at debug
/// level (warn for algorithm mismatches, which suggest tampering).
///
/// # Returns
/// - 401 Unauthorized - For missing, invalid, expired or revoked tokens and bad credentials
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::AccessDenied { .. } => {
                tracing::debug!("{}", self);
                error_response(StatusCode::FORBIDDEN, "Insufficient permissions".to_string())
            }
            Self::AlgorithmMismatch(_) => {
                tracing::warn!("{}", self);
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            Self::MissingBearerToken
            | Self::InvalidSession
            | Self::InvalidToken(_)
            | Self::ClaimsMismatch { .. } => {
                tracing::debug!("{}", self);
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
        }
    }
}
