use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::server::{
    data::business::BusinessRepository,
    error::AppError,
    model::{
        activity::SystemEventKind,
        business::{Business, BusinessStats, CreateBusinessParams, UpdateBusinessParams},
    },
    service::activity::ActivityLog,
};

pub struct BusinessService<'a> {
    db: &'a DatabaseConnection,
    activity: &'a ActivityLog,
}

impl<'a> BusinessService<'a> {
    pub fn new(db: &'a DatabaseConnection, activity: &'a ActivityLog) -> Self {
        Self { db, activity }
    }

    /// Creates a business listing for its owner.
    ///
    /// # Returns
    /// - `Ok(Business)` - Created business
    /// - `Err(AppError::BadRequest)` - Name, category or description missing
    pub async fn create(&self, params: CreateBusinessParams) -> Result<Business, AppError> {
        if params.name.trim().is_empty()
            || params.category.trim().is_empty()
            || params.description.trim().is_empty()
        {
            return Err(AppError::BadRequest(
                "name, category, and description are required".to_string(),
            ));
        }

        let business = BusinessRepository::new(self.db).create(params).await?;

        self.activity
            .record(
                SystemEventKind::BusinessCreated,
                format!("New business '{}' created", business.name),
                business.clone().into_dto(),
            )
            .await;

        Ok(business)
    }

    pub async fn get_all(&self) -> Result<Vec<Business>, AppError> {
        Ok(BusinessRepository::new(self.db).get_all().await?)
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No business with `id`
    pub async fn get_by_id(&self, id: i32) -> Result<Business, AppError> {
        BusinessRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))
    }

    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Business>, AppError> {
        Ok(BusinessRepository::new(self.db).get_by_owner(owner_id).await?)
    }

    /// Counts the owner's businesses and averages the ratings that have been set.
    pub async fn stats(&self, owner_id: i32) -> Result<BusinessStats, AppError> {
        let businesses = BusinessRepository::new(self.db).get_by_owner(owner_id).await?;

        let ratings: Vec<f64> = businesses
            .iter()
            .map(|b| b.rating)
            .filter(|r| *r > 0.0)
            .collect();
        let average_rating = if ratings.is_empty() {
            0.0
        } else {
            ratings.iter().sum::<f64>() / ratings.len() as f64
        };

        Ok(BusinessStats {
            business_count: businesses.len() as u64,
            average_rating,
        })
    }

    /// Applies a partial update to a business owned by `params.owner_id`.
    ///
    /// # Returns
    /// - `Ok(Business)` - Business after the update
    /// - `Err(AppError::BadRequest)` - No field to change
    /// - `Err(AppError::NotFound)` - No business with that id
    /// - `Err(AppError::Forbidden)` - Business belongs to someone else
    pub async fn update(&self, params: UpdateBusinessParams) -> Result<Business, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest("No valid fields to update".to_string()));
        }

        let repo = BusinessRepository::new(self.db);
        let id = params.id;

        if repo.update(params).await? == 0 {
            return Err(self
                .missing_or_forbidden(id, "You can only update your own businesses")
                .await);
        }

        let business = self.get_by_id(id).await?;

        self.activity
            .record(
                SystemEventKind::BusinessUpdated,
                format!("Business '{}' updated", business.name),
                business.clone().into_dto(),
            )
            .await;

        Ok(business)
    }

    /// Deletes a business owned by `owner_id`. Its events stay, unlinked.
    ///
    /// # Returns
    /// - `Ok(())` - Business deleted
    /// - `Err(AppError::NotFound)` - No business with `id`
    /// - `Err(AppError::Forbidden)` - Business belongs to someone else
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<(), AppError> {
        let repo = BusinessRepository::new(self.db);

        if repo.delete(id, owner_id).await? == 0 {
            return Err(self
                .missing_or_forbidden(id, "You can only delete your own businesses")
                .await);
        }

        self.activity
            .record(
                SystemEventKind::BusinessDeleted,
                format!("Business {} deleted", id),
                json!({ "id": id }),
            )
            .await;

        Ok(())
    }

    /// Explains a conditional write that touched no rows.
    async fn missing_or_forbidden(&self, id: i32, forbidden: &str) -> AppError {
        match BusinessRepository::new(self.db).exists(id).await {
            Ok(true) => AppError::Forbidden(forbidden.to_string()),
            Ok(false) => AppError::NotFound("Business not found".to_string()),
            Err(e) => e.into(),
        }
    }
}
