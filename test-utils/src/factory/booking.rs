//! Booking factory for creating test booking entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings against a given event.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    name: String,
    email: String,
    tickets: i32,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Guest {id}"`
    /// - email: `"guest{id}@example.com"`
    /// - tickets: `1`
    /// - status: `"pending"`
    pub fn new(db: &'a DatabaseConnection, event_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            event_id,
            name: format!("Guest {}", id),
            email: format!("guest{}@example.com", id),
            tickets: 1,
            status: "pending".to_string(),
        }
    }

    /// Sets the number of tickets.
    pub fn tickets(mut self, tickets: i32) -> Self {
        self.tickets = tickets;
        self
    }

    /// Sets the stored status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(String::new()),
            tickets: ActiveValue::Set(self.tickets),
            notes: ActiveValue::Set(String::new()),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending single-ticket booking for the given event.
pub async fn create_booking(
    db: &DatabaseConnection,
    event_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, event_id).build().await
}
