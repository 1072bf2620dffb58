use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub owner_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub price: f64,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateEventDto {
    pub business_id: Option<i32>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Format: "YYYY-MM-DDTHH:MM" in UTC
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
}

/// Partial update; absent or blank fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateEventDto {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Format: "YYYY-MM-DDTHH:MM" in UTC
    pub event_date: Option<String>,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct EventIdDto {
    pub id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, IntoParams)]
pub struct EventFilterParams {
    /// Only return events linked to this business
    pub business_id: Option<i32>,
}
