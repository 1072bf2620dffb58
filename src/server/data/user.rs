//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. Registration
//! writes the user and, for owner roles, the owner profile inside one transaction so a
//! failed profile insert never leaves a half-created account behind.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use crate::server::model::user::CreateUserParam;

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user and, for owner roles, their owner profile.
    ///
    /// Both inserts run in a single transaction. A duplicate email surfaces as a unique
    /// constraint violation from the user insert; callers inspect it with
    /// `DbErr::sql_err()`.
    ///
    /// # Arguments
    /// - `param` - Account fields with an already-hashed password
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - The created user row
    /// - `Err(DbErr)` - Constraint violation or other database error; nothing is persisted
    pub async fn create(&self, param: CreateUserParam) -> Result<entity::user::Model, DbErr> {
        let txn = self.db.begin().await?;

        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if param.role.has_owner_profile() {
            entity::owner_profile::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                company: ActiveValue::Set(param.company),
                phone: ActiveValue::Set(param.phone),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(user)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds a user by exact email address.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found, including the password digest
    /// - `Ok(None)` - No account uses that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets the owner profile written at registration, if any.
    #[cfg(test)]
    pub async fn get_owner_profile(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::owner_profile::Model>, DbErr> {
        entity::prelude::OwnerProfile::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Deletes a user. Sessions, owner profile and owned listings cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
