//! Session lifecycle: issue, validate, revoke and sweep.
//!
//! A session is usable only while both halves agree: the signed token verifies and a
//! live row with that exact token exists. Deleting the row revokes the token immediately,
//! even though its signature stays valid until `exp`.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::session::SessionRepository,
    error::{auth::AuthError, AppError},
    model::{session::Identity, user::User},
    service::token::TokenSigner,
};

pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenSigner,
}

impl<'a> SessionService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenSigner) -> Self {
        Self { db, tokens }
    }

    /// Mints a token for `user` and persists its session row.
    ///
    /// The token is returned only once the row is stored; if the insert fails no token
    /// leaves this function.
    ///
    /// # Returns
    /// - `Ok(String)` - Bearer token backed by a live session
    /// - `Err(AppError)` - Signing or persistence failed
    pub async fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let (token, expires_at) = self.tokens.sign(user, now)?;

        let session = SessionRepository::new(self.db)
            .create(user.id, token.clone(), now, expires_at)
            .await?;

        tracing::debug!(
            "Issued session {} for user {} expiring at {}",
            session.id,
            user.id,
            session.expires_at
        );

        Ok(token)
    }

    /// Resolves a bearer token to the caller's identity.
    ///
    /// The session row is looked up first so revoked and expired tokens are turned away
    /// without any signature work.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Live session whose token verifies and whose claims match the row
    /// - `Err(AppError::AuthErr)` - No live row, bad token, or `user_id` mismatch
    /// - `Err(AppError::DbErr)` - Session lookup failed
    pub async fn validate(&self, token: &str) -> Result<Identity, AppError> {
        let Some(session) = SessionRepository::new(self.db)
            .find_live_by_token(token, Utc::now())
            .await?
        else {
            return Err(AuthError::InvalidSession.into());
        };

        let claims = self.tokens.verify(token)?;

        if claims.user_id != session.user_id {
            return Err(AuthError::ClaimsMismatch {
                claim_user_id: claims.user_id,
                session_user_id: session.user_id,
            }
            .into());
        }

        Ok(Identity {
            user_id: claims.user_id,
            role: claims.role,
        })
    }

    /// Deletes the session row for `token`.
    ///
    /// # Returns
    /// - `Ok(true)` - A session was revoked
    /// - `Ok(false)` - No row matched; nothing to do
    pub async fn revoke(&self, token: &str) -> Result<bool, AppError> {
        let removed = SessionRepository::new(self.db)
            .delete_by_token(token)
            .await?;

        Ok(removed > 0)
    }

    /// Deletes every expired session row.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    pub async fn sweep_expired(&self) -> Result<u64, AppError> {
        let removed = SessionRepository::new(self.db)
            .delete_expired(Utc::now())
            .await?;

        Ok(removed)
    }
}
