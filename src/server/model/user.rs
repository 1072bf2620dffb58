//! User domain models and parameters.
//!
//! Provides the account model with its closed `Role`, the credential pair used only during
//! login, and the parameters for creating an account at registration.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{Role, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// Registered account. Never carries the password digest.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownRole))` - Stored role string matches no `Role`
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = entity
            .role
            .parse::<Role>()
            .map_err(|e| InternalError::UnknownRole {
                user_id: entity.id,
                value: e.0,
            })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role,
            created_at: entity.created_at,
        })
    }
}

/// A user together with their stored password digest.
///
/// Only the login path loads this; everything else works with `User`.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let password_hash = entity.password_hash.clone();
        Ok(Self {
            user: User::from_entity(entity)?,
            password_hash,
        })
    }
}

/// Parameters for creating an account at registration.
///
/// `company` and `phone` are only persisted for roles that have an owner profile.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub company: Option<String>,
    pub phone: Option<String>,
}
