//! Business data repository.
//!
//! Updates and deletes are conditional on both id and owner, so ownership is checked and
//! the change applied in one statement. A zero row count means "missing or not yours";
//! callers disambiguate with `exists`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::business::{Business, CreateBusinessParams, UpdateBusinessParams};

pub struct BusinessRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a business owned by `params.owner_id`.
    pub async fn create(&self, params: CreateBusinessParams) -> Result<Business, DbErr> {
        let entity = entity::business::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            category: ActiveValue::Set(params.category),
            description: ActiveValue::Set(params.description),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            address: ActiveValue::Set(params.address),
            rating: ActiveValue::Set(params.rating),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Business::from_entity(entity))
    }

    /// Gets every business, newest first.
    pub async fn get_all(&self) -> Result<Vec<Business>, DbErr> {
        let entities = entity::prelude::Business::find()
            .order_by_desc(entity::business::Column::CreatedAt)
            .order_by_desc(entity::business::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Business::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Business>, DbErr> {
        let entity = entity::prelude::Business::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Business::from_entity))
    }

    /// Gets the businesses owned by a user, newest first.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Business>, DbErr> {
        let entities = entity::prelude::Business::find()
            .filter(entity::business::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::business::Column::CreatedAt)
            .order_by_desc(entity::business::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Business::from_entity).collect())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Business::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies the provided fields to a business if `params.owner_id` owns it.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows updated; 0 when the business is missing or owned by someone else
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateBusinessParams) -> Result<u64, DbErr> {
        let changes = entity::business::ActiveModel {
            name: params.name.map_or(ActiveValue::NotSet, ActiveValue::Set),
            category: params.category.map_or(ActiveValue::NotSet, ActiveValue::Set),
            description: params
                .description
                .map_or(ActiveValue::NotSet, ActiveValue::Set),
            phone: params.phone.map_or(ActiveValue::NotSet, ActiveValue::Set),
            email: params.email.map_or(ActiveValue::NotSet, ActiveValue::Set),
            address: params.address.map_or(ActiveValue::NotSet, ActiveValue::Set),
            rating: params.rating.map_or(ActiveValue::NotSet, ActiveValue::Set),
            ..Default::default()
        };

        let result = entity::prelude::Business::update_many()
            .set(changes)
            .filter(entity::business::Column::Id.eq(params.id))
            .filter(entity::business::Column::OwnerId.eq(params.owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a business if `owner_id` owns it. Linked events keep existing, unlinked.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows deleted; 0 when missing or owned by someone else
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Business::delete_many()
            .filter(entity::business::Column::Id.eq(id))
            .filter(entity::business::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
