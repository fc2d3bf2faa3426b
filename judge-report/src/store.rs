//! Read-only interface to the external log store

use crate::{ReportError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One timestamped line from the log store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl LogEvent {
    pub fn new(timestamp: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }
}

/// Read-only view of the external log store.
///
/// Eventually consistent: the REPORT line for a finished execution may not
/// exist yet at query time, in which case the returned sequence simply does
/// not contain it and the caller retries later.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Ordered events of one log stream
    async fn events(&self, log_group: &str, log_stream: &str) -> Result<Vec<LogEvent>>;
}

/// In-memory log store for tests and local runs
#[derive(Debug, Default, Clone)]
pub struct MemoryLogStore {
    streams: HashMap<(String, String), Vec<LogEvent>>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to a stream, creating the stream if needed
    pub fn push(&mut self, log_group: &str, log_stream: &str, event: LogEvent) {
        self.streams
            .entry((log_group.to_string(), log_stream.to_string()))
            .or_default()
            .push(event);
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn events(&self, log_group: &str, log_stream: &str) -> Result<Vec<LogEvent>> {
        self.streams
            .get(&(log_group.to_string(), log_stream.to_string()))
            .cloned()
            .ok_or_else(|| {
                ReportError::Store(format!(
                    "no such log stream: {}/{}",
                    log_group, log_stream
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn push_then_read_round_trip() {
        let mut store = MemoryLogStore::new();
        store.push("group", "stream", LogEvent::new(Utc::now(), "hello"));
        store.push("group", "stream", LogEvent::new(Utc::now(), "world"));

        let events = store.events("group", "stream").await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message, "hello");
        assert_eq!(events[1].message, "world");
    }

    #[tokio::test]
    async fn unknown_stream_is_a_store_error() {
        let store = MemoryLogStore::new();
        let err = store.events("group", "missing").await.unwrap_err();
        assert!(matches!(err, ReportError::Store(_)));
    }
}
