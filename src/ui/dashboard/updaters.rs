//! Dashboard state update logic
//!
//! Applies load completion events to the dashboard state

use super::state::{DashboardState, LoadState};

use crate::consts::cli_consts::FAILURE_MESSAGE;
use crate::events::{Event, EventType};

impl DashboardState {
    /// Advance the animation tick and apply all queued events.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(event);
        }
    }

    /// Apply a single event. Completions from superseded loads are discarded.
    fn process_event(&mut self, mut event: Event) {
        if event.is_completion() && event.seq != self.latest_seq() {
            let stale = Event::stale_discarded(event.seq, self.latest_seq());
            self.add_to_activity_log(stale);
            return;
        }

        match event.event_type {
            EventType::Success => {
                if let Some(payload) = event.payload.take() {
                    self.set_load_state(LoadState::Loaded(payload));
                    self.set_last_updated(Some(event.timestamp.clone()));
                }
            }
            EventType::Error => {
                self.set_load_state(LoadState::Failed(FAILURE_MESSAGE.to_string()));
            }
            EventType::Refresh => {}
        }

        self.add_to_activity_log(event);
    }
}
