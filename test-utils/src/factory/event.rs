//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events owned by a given user.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    business_id: Option<i32>,
    title: String,
    event_date: DateTime<Utc>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"`
    /// - business_id: `None`
    /// - event_date: 7 days from now
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            business_id: None,
            title: format!("Event {}", next_id()),
            event_date: Utc::now() + Duration::days(7),
        }
    }

    /// Links the event to a business.
    pub fn business_id(mut self, business_id: i32) -> Self {
        self.business_id = Some(business_id);
        self
    }

    /// Sets the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the event date.
    pub fn event_date(mut self, event_date: DateTime<Utc>) -> Self {
        self.event_date = event_date;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            business_id: ActiveValue::Set(self.business_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(String::new()),
            event_date: ActiveValue::Set(self.event_date),
            location: ActiveValue::Set(String::new()),
            price: ActiveValue::Set(0.0),
            category: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an upcoming event with default values for the given owner.
pub async fn create_event(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, owner_id).build().await
}
