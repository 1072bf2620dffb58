//! Event data repository.
//!
//! Same conditional update/delete scheme as businesses: the owner is part of the WHERE
//! clause.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::event::{CreateEventParams, Event, UpdateEventParams};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            business_id: ActiveValue::Set(params.business_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            event_date: ActiveValue::Set(params.event_date),
            location: ActiveValue::Set(params.location),
            price: ActiveValue::Set(params.price),
            category: ActiveValue::Set(params.category),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    /// Gets events dated at or after `now`, soonest first.
    ///
    /// # Arguments
    /// - `business_id` - When set, only events linked to that business
    /// - `now` - Cut-off for past events
    pub async fn get_upcoming(
        &self,
        business_id: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Event>, DbErr> {
        let mut query = entity::prelude::Event::find()
            .filter(entity::event::Column::EventDate.gte(now));

        if let Some(business_id) = business_id {
            query = query.filter(entity::event::Column::BusinessId.eq(business_id));
        }

        let entities = query
            .order_by_asc(entity::event::Column::EventDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Event::from_entity))
    }

    /// Gets all events owned by a user, past ones included, soonest first.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::event::Column::EventDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Event::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies the provided fields to an event if `params.owner_id` owns it.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows updated; 0 when the event is missing or owned by someone else
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateEventParams) -> Result<u64, DbErr> {
        let changes = entity::event::ActiveModel {
            title: params.title.map_or(ActiveValue::NotSet, ActiveValue::Set),
            description: params
                .description
                .map_or(ActiveValue::NotSet, ActiveValue::Set),
            event_date: params.event_date.map_or(ActiveValue::NotSet, ActiveValue::Set),
            location: params.location.map_or(ActiveValue::NotSet, ActiveValue::Set),
            price: params.price.map_or(ActiveValue::NotSet, ActiveValue::Set),
            category: params.category.map_or(ActiveValue::NotSet, ActiveValue::Set),
            ..Default::default()
        };

        let result = entity::prelude::Event::update_many()
            .set(changes)
            .filter(entity::event::Column::Id.eq(params.id))
            .filter(entity::event::Column::OwnerId.eq(params.owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an event if `owner_id` owns it. Its bookings cascade.
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Event::delete_many()
            .filter(entity::event::Column::Id.eq(id))
            .filter(entity::event::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
