//! Booking models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::booking::{BookingDto, BookingStatus, CreateBookingDto},
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub event_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tickets: i32,
    pub notes: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            event_id: self.event_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            tickets: self.tickets,
            notes: self.notes,
            status: self.status,
            created_at: self.created_at,
        }
    }

    /// # Returns
    /// - `Err(AppError::InternalErr(UnknownBookingStatus))` - Stored status is not recognised
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, AppError> {
        let status = entity
            .status
            .parse::<BookingStatus>()
            .map_err(|value| InternalError::UnknownBookingStatus {
                booking_id: entity.id,
                value,
            })?;

        Ok(Self {
            id: entity.id,
            event_id: entity.event_id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            tickets: entity.tickets,
            notes: entity.notes,
            status,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub event_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tickets: i32,
    pub notes: String,
}

impl CreateBookingParams {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Missing event, name or email, or fewer than one ticket
    pub fn from_dto(dto: CreateBookingDto) -> Result<Self, AppError> {
        if dto.event_id <= 0
            || dto.name.trim().is_empty()
            || dto.email.trim().is_empty()
            || dto.tickets < 1
        {
            return Err(AppError::BadRequest(
                "event_id, name, email, and tickets are required".to_string(),
            ));
        }

        Ok(Self {
            event_id: dto.event_id,
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            tickets: dto.tickets,
            notes: dto.notes,
        })
    }
}
