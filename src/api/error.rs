//! Error handling for the backend API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The response body was not a valid payload.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl DashboardError {
    pub async fn from_response(response: reqwest::Response) -> DashboardError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        DashboardError::Http { status, message }
    }
}
