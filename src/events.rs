//! Event System
//!
//! Events reported by load tasks back to the UI loop, also kept as activity log entries

use crate::api::error::DashboardError;
use crate::error_classifier::ErrorClassifier;
use crate::logging::{LogLevel, should_log_with_env};
use crate::model::DashboardPayload;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Refresh,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Sequence number of the load this event belongs to.
    pub seq: u64,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// The fetched summary, present on success events only
    pub payload: Option<Box<DashboardPayload>>,
}

impl Event {
    fn new(seq: u64, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            seq,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            payload: None,
        }
    }

    pub fn load_started(seq: u64, api_url: &str) -> Self {
        Self::new(
            seq,
            format!("Load #{}: requesting summary from {}", seq, api_url),
            EventType::Refresh,
            LogLevel::Debug,
        )
    }

    pub fn load_succeeded(seq: u64, payload: DashboardPayload) -> Self {
        let mut event = Self::new(
            seq,
            format!(
                "Load #{}: received {} categories",
                seq,
                payload.breakdown.len()
            ),
            EventType::Success,
            LogLevel::Info,
        );
        event.payload = Some(Box::new(payload));
        event
    }

    pub fn load_failed(seq: u64, error: &DashboardError) -> Self {
        let classifier = ErrorClassifier::new();
        Self::new(
            seq,
            format!("Load #{}: {}", seq, classifier.describe(error)),
            EventType::Error,
            classifier.classify_fetch_error(error),
        )
    }

    pub fn stale_discarded(seq: u64, latest: u64) -> Self {
        Self::new(
            seq,
            format!("Load #{}: discarded, superseded by load #{}", seq, latest),
            EventType::Refresh,
            LogLevel::Debug,
        )
    }

    /// Whether this event completes a load (success or failure).
    pub fn is_completion(&self) -> bool {
        matches!(self.event_type, EventType::Success | EventType::Error)
    }

    pub fn should_display(&self) -> bool {
        // Always show completions and info level events
        if self.is_completion() || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::home_payload;

    #[test]
    fn test_success_event_carries_payload() {
        let event = Event::load_succeeded(3, home_payload());
        assert_eq!(event.seq, 3);
        assert_eq!(event.event_type, EventType::Success);
        assert!(event.is_completion());
        assert_eq!(event.payload.as_deref(), Some(&home_payload()));
        assert!(event.msg.contains("1 categories"));
    }

    #[test]
    fn test_failure_event_is_classified() {
        let error = DashboardError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        let event = Event::load_failed(1, &error);
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.log_level, LogLevel::Warn);
        assert!(event.payload.is_none());
        assert!(event.should_display());
        assert!(event.to_string().starts_with("Error ["));
    }

    #[test]
    fn test_started_event_is_not_a_completion() {
        let event = Event::load_started(1, "http://127.0.0.1:8000");
        assert!(!event.is_completion());
        assert_eq!(event.log_level, LogLevel::Debug);
    }
}
