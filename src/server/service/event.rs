use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    model::user::Role,
    server::{
        data::{business::BusinessRepository, event::EventRepository},
        error::AppError,
        model::{
            activity::SystemEventKind,
            event::{CreateEventParams, Event, UpdateEventParams},
        },
        service::activity::ActivityLog,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    activity: &'a ActivityLog,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection, activity: &'a ActivityLog) -> Self {
        Self { db, activity }
    }

    /// Creates an event for `params.owner_id`.
    ///
    /// Only business owners may link an event to a business, and only to one they own. For
    /// any other role a supplied `business_id` is dropped.
    ///
    /// # Returns
    /// - `Ok(Event)` - Created event
    /// - `Err(AppError::NotFound)` - Linked business does not exist
    /// - `Err(AppError::Forbidden)` - Linked business belongs to someone else
    pub async fn create(
        &self,
        role: Role,
        mut params: CreateEventParams,
    ) -> Result<Event, AppError> {
        params.business_id = match (role, params.business_id) {
            (Role::BusinessOwner, Some(business_id)) => {
                let business = BusinessRepository::new(self.db)
                    .get_by_id(business_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

                if business.owner_id != params.owner_id {
                    return Err(AppError::Forbidden(
                        "You can only create events for your own businesses".to_string(),
                    ));
                }

                Some(business_id)
            }
            (Role::BusinessOwner, None) | (Role::EventOwner, _) | (Role::Member, _) => None,
        };

        let event = EventRepository::new(self.db).create(params).await?;

        self.activity
            .record(
                SystemEventKind::EventCreated,
                format!("New event '{}' created", event.title),
                event.clone().into_dto(),
            )
            .await;

        Ok(event)
    }

    /// Gets upcoming events, optionally limited to one business.
    pub async fn get_upcoming(&self, business_id: Option<i32>) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db)
            .get_upcoming(business_id, Utc::now())
            .await?)
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No event with `id`
    pub async fn get_by_id(&self, id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).get_by_owner(owner_id).await?)
    }

    /// Applies a partial update to an event owned by `params.owner_id`.
    ///
    /// # Returns
    /// - `Ok(Event)` - Event after the update
    /// - `Err(AppError::BadRequest)` - No field to change
    /// - `Err(AppError::NotFound)` - No event with that id
    /// - `Err(AppError::Forbidden)` - Event belongs to someone else
    pub async fn update(&self, params: UpdateEventParams) -> Result<Event, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest("No valid fields to update".to_string()));
        }

        let id = params.id;

        if EventRepository::new(self.db).update(params).await? == 0 {
            return Err(self
                .missing_or_forbidden(id, "You can only update your own events")
                .await);
        }

        let event = self.get_by_id(id).await?;

        self.activity
            .record(
                SystemEventKind::EventUpdated,
                format!("Event '{}' updated", event.title),
                event.clone().into_dto(),
            )
            .await;

        Ok(event)
    }

    /// Deletes an event owned by `owner_id` along with its bookings.
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<(), AppError> {
        if EventRepository::new(self.db).delete(id, owner_id).await? == 0 {
            return Err(self
                .missing_or_forbidden(id, "You can only delete your own events")
                .await);
        }

        self.activity
            .record(
                SystemEventKind::EventDeleted,
                format!("Event {} deleted", id),
                json!({ "id": id }),
            )
            .await;

        Ok(())
    }

    async fn missing_or_forbidden(&self, id: i32, forbidden: &str) -> AppError {
        match EventRepository::new(self.db).exists(id).await {
            Ok(true) => AppError::Forbidden(forbidden.to_string()),
            Ok(false) => AppError::NotFound("Event not found".to_string()),
            Err(e) => e.into(),
        }
    }
}
