//! In-memory activity models: the system event feed and request statistics.

use chrono::{DateTime, Utc};

use crate::model::system::{StatsDto, SystemEventDto};

/// Kind of change recorded in the system event feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEventKind {
    BusinessCreated,
    BusinessUpdated,
    BusinessDeleted,
    EventCreated,
    EventUpdated,
    EventDeleted,
    BookingCreated,
}

impl SystemEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemEventKind::BusinessCreated => "business_created",
            SystemEventKind::BusinessUpdated => "business_updated",
            SystemEventKind::BusinessDeleted => "business_deleted",
            SystemEventKind::EventCreated => "event_created",
            SystemEventKind::EventUpdated => "event_updated",
            SystemEventKind::EventDeleted => "event_deleted",
            SystemEventKind::BookingCreated => "booking_created",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SystemEvent {
    pub kind: SystemEventKind,
    pub message: String,
    /// Snapshot of the affected record.
    pub data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl SystemEvent {
    pub fn into_dto(self) -> SystemEventDto {
        SystemEventDto {
            kind: self.kind.as_str().to_string(),
            message: self.message,
            data: self.data,
            timestamp: self.timestamp,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActivityStats {
    pub total_requests: u64,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: f64,
}

impl ActivityStats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            total_requests: self.total_requests,
            uptime_seconds: self.uptime_seconds,
            start_time: self.started_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}
