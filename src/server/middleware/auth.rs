use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::session::Identity,
        service::{session::SessionService, token::TokenSigner},
    },
};

/// Route-level capabilities derived from a user's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Create and manage business listings.
    ManageBusinesses,
    /// Create and manage events.
    ManageEvents,
}

impl Permission {
    fn granted_to(self, role: Role) -> bool {
        match (self, role) {
            (Permission::ManageBusinesses, Role::BusinessOwner) => true,
            (Permission::ManageBusinesses, Role::EventOwner | Role::Member) => false,
            (Permission::ManageEvents, Role::BusinessOwner | Role::EventOwner) => true,
            (Permission::ManageEvents, Role::Member) => false,
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenSigner,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenSigner,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Validates the caller's bearer token and checks every listed permission.
    ///
    /// An empty slice only requires a live session.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Authenticated caller holding all permissions
    /// - `Err(AppError::AuthErr)` - 401 for a missing or invalid session, 403 for a missing
    ///   permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<Identity, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingBearerToken)?;

        let identity = SessionService::new(self.db, self.tokens)
            .validate(token)
            .await?;

        for permission in permissions {
            if !permission.granted_to(identity.role) {
                return Err(AuthError::AccessDenied {
                    user_id: identity.user_id,
                    reason: format!("{} lacks {:?}", identity.role, permission),
                }
                .into());
            }
        }

        Ok(identity)
    }
}

/// Extracts `<token>` from an `Authorization: Bearer <token>` header.
///
/// Returns `None` when the header is absent, not valid ASCII, uses another scheme, or
/// carries an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
