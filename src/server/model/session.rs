//! Session and identity models.

use chrono::{DateTime, Utc};

use crate::model::user::Role;

/// Persisted record backing a bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn from_entity(entity: entity::session::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            token: entity.token,
            created_at: entity.created_at,
            expires_at: entity.expires_at,
        }
    }
}

/// Authenticated caller, produced by session validation and handed to downstream services.
///
/// Services use `user_id` for ownership checks; the gate uses `role` for route access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub role: Role,
}
