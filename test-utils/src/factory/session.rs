//! Session factory for creating raw session rows.
//!
//! These rows carry arbitrary opaque tokens; they are meant for repository-level tests
//! (lookups, expiry, sweeping). Tests that need a token which also passes signature
//! verification must mint it through the server's session service.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sessions with customizable token and expiry.
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: String,
    expires_in: Duration,
}

impl<'a> SessionFactory<'a> {
    /// Creates a new SessionFactory with default values.
    ///
    /// Defaults:
    /// - token: `"token-{id}"`
    /// - expires_in: 24 hours from now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: format!("token-{}", next_id()),
            expires_in: Duration::hours(24),
        }
    }

    /// Sets the opaque token string.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Sets the expiry relative to now; negative durations create already-expired rows.
    pub fn expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Builds and inserts the session entity into the database.
    pub async fn build(self) -> Result<entity::session::Model, DbErr> {
        let now = Utc::now();
        entity::session::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            token: ActiveValue::Set(self.token),
            created_at: ActiveValue::Set(now),
            expires_at: ActiveValue::Set(now + self.expires_in),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a live session for the user with a unique token.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::session::Model, DbErr> {
    SessionFactory::new(db, user_id).build().await
}

/// Creates a session that expired the given duration ago.
pub async fn create_expired_session(
    db: &DatabaseConnection,
    user_id: i32,
    expired_for: Duration,
) -> Result<entity::session::Model, DbErr> {
    SessionFactory::new(db, user_id)
        .expires_in(-expired_for)
        .build()
        .await
}
