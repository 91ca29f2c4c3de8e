//! Dashboard state management
//!
//! Contains the load state of the dashboard view and the activity log

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::model::DashboardPayload;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;

/// Fetch lifecycle of the dashboard view. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// A load is in flight and nothing is shown yet.
    Pending,
    /// The latest load failed with a user-facing message.
    Failed(String),
    /// The latest load succeeded.
    Loaded(Box<DashboardPayload>),
}

/// Dashboard view state.
#[derive(Debug)]
pub struct DashboardState {
    /// Base URL of the backend being displayed.
    pub api_url: String,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// Current fetch lifecycle state
    load_state: LoadState,
    /// Sequence number of the most recently initiated load; 0 before the first one
    latest_seq: u64,
    /// Timestamp of the last applied successful load
    last_updated: Option<String>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(ui_config: UIConfig) -> Self {
        Self {
            api_url: ui_config.api_url,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            load_state: LoadState::Pending,
            latest_seq: 0,
            last_updated: None,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    /// Starts a new load: the state goes back to `Pending` and the returned
    /// sequence number becomes the only one whose result will be applied.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_seq += 1;
        self.load_state = LoadState::Pending;
        self.add_to_activity_log(Event::load_started(self.latest_seq, &self.api_url));
        self.latest_seq
    }

    pub(super) fn set_load_state(&mut self, state: LoadState) {
        self.load_state = state;
    }

    pub(super) fn set_last_updated(&mut self, timestamp: Option<String>) {
        self.last_updated = timestamp;
    }

    /// Most recent activity entry that passes the display filter.
    pub fn latest_activity(&self) -> Option<&Event> {
        self.activity_logs
            .iter()
            .rev()
            .find(|event| event.should_display())
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}
