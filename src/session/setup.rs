//! Session setup and initialization

use crate::api::DashboardClient;
use crate::config::{get_config_path, resolve_api_url};
use std::error::Error;
use std::sync::Arc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Base URL of the backend
    pub api_url: String,
    /// Backend client
    pub client: Arc<DashboardClient>,
}

/// Resolves the backend URL and builds the client.
///
/// # Arguments
/// * `api_url` - URL given on the command line, if any
pub fn setup_session(api_url: Option<String>) -> Result<SessionData, Box<dyn Error>> {
    let config_path = get_config_path()?;
    let api_url = resolve_api_url(api_url, &config_path);
    let client = DashboardClient::new(api_url.clone())?;

    Ok(SessionData {
        api_url,
        client: Arc::new(client),
    })
}
