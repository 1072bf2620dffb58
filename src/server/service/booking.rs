use sea_orm::DatabaseConnection;

use crate::{
    model::booking::BookingStatus,
    server::{
        data::{booking::BookingRepository, event::EventRepository},
        error::AppError,
        model::{
            activity::SystemEventKind,
            booking::{Booking, CreateBookingParams},
        },
        service::activity::ActivityLog,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    activity: &'a ActivityLog,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, activity: &'a ActivityLog) -> Self {
        Self { db, activity }
    }

    /// Books tickets for an event. Open to anonymous callers.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Pending booking
    /// - `Err(AppError::NotFound)` - Event does not exist
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        if !EventRepository::new(self.db).exists(params.event_id).await? {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        let entity = BookingRepository::new(self.db).create(params).await?;
        let booking = Booking::from_entity(entity)?;

        self.activity
            .record(
                SystemEventKind::BookingCreated,
                format!(
                    "New booking for event {} ({} tickets)",
                    booking.event_id, booking.tickets
                ),
                booking.clone().into_dto(),
            )
            .await;

        Ok(booking)
    }

    /// Gets bookings for every event owned by `owner_id`, newest first.
    pub async fn get_for_event_owner(&self, owner_id: i32) -> Result<Vec<Booking>, AppError> {
        BookingRepository::new(self.db)
            .get_for_event_owner(owner_id)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect()
    }

    /// Sets the status of a booking on one of `owner_id`'s events.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking after the change
    /// - `Err(AppError::NotFound)` - No booking with `id`
    /// - `Err(AppError::Forbidden)` - Booked event belongs to someone else
    pub async fn update_status(
        &self,
        id: i32,
        owner_id: i32,
        status: BookingStatus,
    ) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        if repo.update_status(id, owner_id, status).await? == 0 {
            return Err(self
                .missing_or_forbidden(id, "You can only update bookings for your own events")
                .await);
        }

        let entity = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        Booking::from_entity(entity)
    }

    /// Deletes a booking on one of `owner_id`'s events.
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<(), AppError> {
        if BookingRepository::new(self.db).delete(id, owner_id).await? == 0 {
            return Err(self
                .missing_or_forbidden(id, "You can only delete bookings for your own events")
                .await);
        }

        Ok(())
    }

    async fn missing_or_forbidden(&self, id: i32, forbidden: &str) -> AppError {
        match BookingRepository::new(self.db).exists(id).await {
            Ok(true) => AppError::Forbidden(forbidden.to_string()),
            Ok(false) => AppError::NotFound("Booking not found".to_string()),
            Err(e) => e.into(),
        }
    }
}
