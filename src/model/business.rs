use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BusinessDto {
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

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateBusinessDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub rating: f64,
}

/// Partial update; absent or blank fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateBusinessDto {
    pub id: i32,
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BusinessIdDto {
    pub id: i32,
}

/// Summary of the businesses owned by the caller.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BusinessStatsDto {
    pub business_count: u64,
    /// Mean of the non-zero ratings, or 0 when none are rated.
    pub average_rating: f64,
}
