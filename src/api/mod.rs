use crate::api::error::DashboardError;
use crate::model::{DashboardPayload, ServiceStatus};

pub(crate) mod client;
pub use client::DashboardClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    /// Base URL of the backend this API talks to.
    fn api_url(&self) -> &str;

    /// Fetch the current net-worth summary.
    async fn get_dashboard(&self) -> Result<DashboardPayload, DashboardError>;

    /// Ask the backend whether it is up.
    async fn get_status(&self) -> Result<ServiceStatus, DashboardError>;
}
