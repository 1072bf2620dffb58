use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::server::model::activity::{ActivityStats, SystemEvent, SystemEventKind};

/// Maximum number of system events kept in memory.
pub const MAX_SYSTEM_EVENTS: usize = 100;

/// In-memory request counter and recent-change feed.
///
/// Cloning is cheap; every clone shares the same counter and buffer. Nothing here is
/// persisted, so both reset when the process restarts.
#[derive(Clone)]
pub struct ActivityLog {
    requests: Arc<AtomicU64>,
    started_at: DateTime<Utc>,
    events: Arc<RwLock<VecDeque<SystemEvent>>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(AtomicU64::new(0)),
            started_at: Utc::now(),
            events: Arc::new(RwLock::new(VecDeque::with_capacity(MAX_SYSTEM_EVENTS))),
        }
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Appends an event to the feed, evicting the oldest once the buffer is full.
    ///
    /// `data` is stored as a JSON snapshot; a value that fails to serialize is kept as `null`.
    pub async fn record(
        &self,
        kind: SystemEventKind,
        message: impl Into<String>,
        data: impl Serialize,
    ) {
        let event = SystemEvent {
            kind,
            message: message.into(),
            data: serde_json::to_value(data).unwrap_or(serde_json::Value::Null),
            timestamp: Utc::now(),
        };

        tracing::debug!("System event {}: {}", kind.as_str(), event.message);

        let mut events = self.events.write().await;
        while events.len() >= MAX_SYSTEM_EVENTS {
            events.pop_front();
        }
        events.push_back(event);
    }

    /// Returns the buffered events, oldest first.
    pub async fn events(&self) -> Vec<SystemEvent> {
        self.events.read().await.iter().cloned().collect()
    }

    pub fn stats(&self) -> ActivityStats {
        let uptime = Utc::now() - self.started_at;

        ActivityStats {
            total_requests: self.requests.load(Ordering::Relaxed),
            started_at: self.started_at,
            uptime_seconds: uptime.num_milliseconds() as f64 / 1000.0,
        }
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}
