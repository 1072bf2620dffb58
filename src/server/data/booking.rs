//! Booking data repository.
//!
//! Bookings belong to whoever owns the booked event. Owner-scoped statements restrict
//! `event_id` to a subquery of the owner's events, keeping check and mutation atomic.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, SelectStatement},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::{model::booking::BookingStatus, server::model::booking::CreateBookingParams};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending booking. The event is assumed to exist.
    pub async fn create(
        &self,
        params: CreateBookingParams,
    ) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            event_id: ActiveValue::Set(params.event_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            tickets: ActiveValue::Set(params.tickets),
            notes: ActiveValue::Set(params.notes),
            status: ActiveValue::Set(BookingStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets bookings for every event owned by `owner_id`, newest first.
    pub async fn get_for_event_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::EventId.in_subquery(owned_event_ids(owner_id)))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets a booking's status if its event is owned by `owner_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows updated; 0 when missing or the event belongs to someone else
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        owner_id: i32,
        status: BookingStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(status.as_str()),
            )
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::EventId.in_subquery(owned_event_ids(owner_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a booking if its event is owned by `owner_id`.
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::EventId.in_subquery(owned_event_ids(owner_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// `SELECT id FROM event WHERE owner_id = ?`
fn owned_event_ids(owner_id: i32) -> SelectStatement {
    entity::prelude::Event::find()
        .select_only()
        .column(entity::event::Column::Id)
        .filter(entity::event::Column::OwnerId.eq(owner_id))
        .into_query()
}
