use crate::api::error::DashboardError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &DashboardError) -> LogLevel {
        match error {
            // Non-critical: backend up but struggling
            DashboardError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: wrong endpoint or a backend speaking another contract
            DashboardError::Http { status, .. } if (400..=499).contains(status) => LogLevel::Error,
            DashboardError::Decode(_) => LogLevel::Error,

            // Network issues - usually the backend is simply not running
            _ => LogLevel::Warn,
        }
    }

    /// Short, log-friendly description of a failed fetch.
    pub fn describe(&self, error: &DashboardError) -> String {
        match error {
            DashboardError::Reqwest(e) if e.is_timeout() => "Request timed out".to_string(),
            DashboardError::Reqwest(e) if e.is_connect() => "Connection refused".to_string(),
            DashboardError::Reqwest(_) => "Network error".to_string(),
            DashboardError::Http { status, .. } => format!("Backend returned HTTP {}", status),
            DashboardError::Decode(e) => format!("Malformed payload: {}", e),
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
