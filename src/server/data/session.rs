//! Session data repository.
//!
//! The session table is the revocation list: a token is only usable while a row with that
//! exact token exists and has not expired. Every method is a single statement.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::session::Session;

pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a session row for a freshly signed token.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the session
    /// - `token` - The signed token, stored verbatim
    /// - `created_at` - Issue time
    /// - `expires_at` - Expiry, identical to the token's `exp` claim
    ///
    /// # Returns
    /// - `Ok(Session)` - The stored session
    /// - `Err(DbErr)` - Insert failed (including a duplicate token)
    pub async fn create(
        &self,
        user_id: i32,
        token: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<Session, DbErr> {
        let entity = entity::session::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token: ActiveValue::Set(token),
            created_at: ActiveValue::Set(created_at),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Session::from_entity(entity))
    }

    /// Finds the session for a token if it is still live at `now`.
    ///
    /// # Returns
    /// - `Ok(Some(Session))` - Row exists and `expires_at > now`
    /// - `Ok(None)` - Unknown, revoked or expired token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_live_by_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Session>, DbErr> {
        let entity = entity::prelude::Session::find()
            .filter(entity::session::Column::Token.eq(token))
            .filter(entity::session::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await?;

        Ok(entity.map(Session::from_entity))
    }

    /// Deletes the session row matching a token.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_token(&self, token: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::Token.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every session that expired before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::ExpiresAt.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts sessions belonging to a user, live or not.
    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }
}
