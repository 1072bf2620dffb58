//! Business factory for creating test business entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test businesses owned by a given user.
pub struct BusinessFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    category: String,
    rating: f64,
}

impl<'a> BusinessFactory<'a> {
    /// Creates a new BusinessFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Business {id}"`
    /// - category: `"Retail"`
    /// - rating: `0.0`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            name: format!("Business {}", next_id()),
            category: "Retail".to_string(),
            rating: 0.0,
        }
    }

    /// Sets the business name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the business category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the business rating.
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Builds and inserts the business entity into the database.
    pub async fn build(self) -> Result<entity::business::Model, DbErr> {
        entity::business::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            description: ActiveValue::Set("A test business".to_string()),
            phone: ActiveValue::Set(String::new()),
            email: ActiveValue::Set(String::new()),
            address: ActiveValue::Set(String::new()),
            rating: ActiveValue::Set(self.rating),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a business with default values for the given owner.
pub async fn create_business(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::business::Model, DbErr> {
    BusinessFactory::new(db, owner_id).build().await
}
