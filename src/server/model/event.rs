//! Event models and parameters.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{
    model::event::{CreateEventDto, EventDto, UpdateEventDto},
    server::{error::AppError, model::business::non_blank},
};

/// Accepted input format for `event_date`, interpreted as UTC.
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub owner_id: i32,
    pub business_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub price: f64,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            owner_id: self.owner_id,
            business_id: self.business_id,
            title: self.title,
            description: self.description,
            event_date: self.event_date,
            location: self.location,
            price: self.price,
            category: self.category,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            business_id: entity.business_id,
            title: entity.title,
            description: entity.description,
            event_date: entity.event_date,
            location: entity.location,
            price: entity.price,
            category: entity.category,
            created_at: entity.created_at,
        }
    }
}

/// Parses an `event_date` string in `EVENT_DATE_FORMAT` as a UTC instant.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed date
/// - `Err(AppError::BadRequest)` - String is not in the expected format
pub fn parse_event_date(value: &str) -> Result<DateTime<Utc>, AppError> {
    NaiveDateTime::parse_from_str(value.trim(), EVENT_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            AppError::BadRequest("Invalid event_date format, use YYYY-MM-DDTHH:MM".to_string())
        })
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub owner_id: i32,
    pub business_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub price: f64,
    pub category: String,
}

impl CreateEventParams {
    /// Validates the DTO and converts it for the given owner.
    ///
    /// A `business_id` of zero or less is treated as absent.
    ///
    /// # Returns
    /// - `Ok(CreateEventParams)` - Title present and date parsed
    /// - `Err(AppError::BadRequest)` - Missing title/date or malformed date
    pub fn from_dto(owner_id: i32, dto: CreateEventDto) -> Result<Self, AppError> {
        if dto.title.trim().is_empty() || dto.event_date.trim().is_empty() {
            return Err(AppError::BadRequest(
                "title and event_date are required".to_string(),
            ));
        }

        Ok(Self {
            owner_id,
            business_id: dto.business_id.filter(|id| *id > 0),
            event_date: parse_event_date(&dto.event_date)?,
            title: dto.title,
            description: dto.description,
            location: dto.location,
            price: dto.price,
            category: dto.category,
        })
    }
}

/// Fields to change on an event the caller owns. `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub id: i32,
    pub owner_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl UpdateEventParams {
    /// Builds update parameters, dropping blank strings and negative prices.
    ///
    /// # Returns
    /// - `Ok(UpdateEventParams)` - Converted parameters
    /// - `Err(AppError::BadRequest)` - `event_date` given but malformed
    pub fn from_dto(owner_id: i32, dto: UpdateEventDto) -> Result<Self, AppError> {
        let event_date = match non_blank(dto.event_date) {
            Some(raw) => Some(parse_event_date(&raw)?),
            None => None,
        };

        Ok(Self {
            id: dto.id,
            owner_id,
            title: non_blank(dto.title),
            description: non_blank(dto.description),
            event_date,
            location: non_blank(dto.location),
            price: dto.price.filter(|p| *p >= 0.0),
            category: non_blank(dto.category),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.event_date.is_none()
            && self.location.is_none()
            && self.price.is_none()
            && self.category.is_none()
    }
}
