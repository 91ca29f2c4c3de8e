//! Dashboard loading
//!
//! Each load runs as its own tokio task and reports a single completion event,
//! tagged with the sequence number handed out by the dashboard state.

use super::core::EventSender;
use crate::api::DashboardApi;
use crate::events::Event;
use log::{debug, warn};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Spawns fetches of the net-worth summary.
#[derive(Clone)]
pub struct DashboardLoader {
    api: Arc<dyn DashboardApi>,
    event_sender: EventSender,
}

impl DashboardLoader {
    pub fn new(api: Arc<dyn DashboardApi>, event_sender: EventSender) -> Self {
        Self { api, event_sender }
    }

    /// Starts load `seq` in the background. Earlier loads are left running.
    pub fn spawn(&self, seq: u64) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let event_sender = self.event_sender.clone();
        tokio::spawn(async move {
            let event = fetch_dashboard(api.as_ref(), seq).await;
            event_sender.send_event(event).await;
        })
    }
}

/// Performs one fetch and converts its outcome into a completion event.
pub async fn fetch_dashboard(api: &dyn DashboardApi, seq: u64) -> Event {
    match api.get_dashboard().await {
        Ok(payload) => {
            debug!("load #{} succeeded", seq);
            Event::load_succeeded(seq, payload)
        }
        Err(e) => {
            warn!("load #{} failed: {}", seq, e);
            Event::load_failed(seq, &e)
        }
    }
}
