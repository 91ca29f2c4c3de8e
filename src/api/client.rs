//! Wealth Backend Client
//!
//! A JSON-over-HTTP client for the wealth backend.

use crate::api::DashboardApi;
use crate::api::error::DashboardError;
use crate::consts::cli_consts::{self, network};
use crate::model::{DashboardPayload, ServiceStatus};
use log::debug;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("wealth-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    api_url: String,
}

impl DashboardClient {
    pub fn new(api_url: impl Into<String>) -> Result<Self, DashboardError> {
        let client = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .timeout(network::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, DashboardError> {
        if !response.status().is_success() {
            return Err(DashboardError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, DashboardError> {
        let url = self.build_url(endpoint);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl DashboardApi for DashboardClient {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get_dashboard(&self) -> Result<DashboardPayload, DashboardError> {
        self.get_request(cli_consts::DASHBOARD_ENDPOINT).await
    }

    async fn get_status(&self) -> Result<ServiceStatus, DashboardError> {
        self.get_request(cli_consts::STATUS_ENDPOINT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_without_double_slashes() {
        let client = DashboardClient::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(
            client.build_url("/api/dashboard"),
            "http://127.0.0.1:8000/api/dashboard"
        );
        assert_eq!(client.build_url(""), "http://127.0.0.1:8000/");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_transport_error() {
        // Bind and release a port so nothing is listening on it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = DashboardClient::new(format!("http://127.0.0.1:{}", port)).unwrap();
        let result = client.get_dashboard().await;
        assert!(matches!(result, Err(DashboardError::Reqwest(_))));
    }
}
