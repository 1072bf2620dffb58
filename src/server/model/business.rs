//! Business listing models and parameters.

use chrono::{DateTime, Utc};

use crate::model::business::{
    BusinessDto, BusinessStatsDto, CreateBusinessDto, UpdateBusinessDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

impl Business {
    pub fn into_dto(self) -> BusinessDto {
        BusinessDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            category: self.category,
            description: self.description,
            phone: self.phone,
            email: self.email,
            address: self.address,
            rating: self.rating,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::business::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            category: entity.category,
            description: entity.description,
            phone: entity.phone,
            email: entity.email,
            address: entity.address,
            rating: entity.rating,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBusinessParams {
    pub owner_id: i32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub rating: f64,
}

impl CreateBusinessParams {
    pub fn from_dto(owner_id: i32, dto: CreateBusinessDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            category: dto.category,
            description: dto.description,
            phone: dto.phone,
            email: dto.email,
            address: dto.address,
            rating: dto.rating,
        }
    }
}

/// Fields to change on a business the caller owns. `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBusinessParams {
    pub id: i32,
    pub owner_id: i32,
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
}

impl UpdateBusinessParams {
    /// Builds update parameters, dropping blank strings and non-positive ratings.
    pub fn from_dto(owner_id: i32, dto: UpdateBusinessDto) -> Self {
        Self {
            id: dto.id,
            owner_id,
            name: non_blank(dto.name),
            category: non_blank(dto.category),
            description: non_blank(dto.description),
            phone: non_blank(dto.phone),
            email: non_blank(dto.email),
            address: non_blank(dto.address),
            rating: dto.rating.filter(|r| *r > 0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.rating.is_none()
    }
}

/// Aggregate figures over one owner's businesses.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessStats {
    pub business_count: u64,
    pub average_rating: f64,
}

impl BusinessStats {
    pub fn into_dto(self) -> BusinessStatsDto {
        BusinessStatsDto {
            business_count: self.business_count,
            average_rating: self.average_rating,
        }
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
