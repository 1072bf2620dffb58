use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct StatsDto {
    pub total_requests: u64,
    pub uptime_seconds: f64,
    /// Formatted as "YYYY-MM-DD HH:MM:SS UTC"
    pub start_time: String,
}

/// A recorded change to the directory's listings.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SystemEventDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}
