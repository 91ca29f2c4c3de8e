//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::DashboardApi;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event as LoaderEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::workers::DashboardLoader;
use crate::workers::core::EventSender;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub api_url: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, api_url: String) -> Self {
        Self {
            with_background_color,
            api_url,
        }
    }
}

/// Application state
pub struct App {
    /// The dashboard view being displayed.
    state: DashboardState,

    /// Spawns load tasks.
    loader: DashboardLoader,

    /// Receives completion events from load tasks.
    event_receiver: mpsc::Receiver<LoaderEvent>,
}

impl App {
    /// Creates a new instance of the application. No load is started yet.
    pub fn new(api: Arc<dyn DashboardApi>, with_background_color: bool) -> Self {
        let (event_sender, event_receiver) = mpsc::channel::<LoaderEvent>(EVENT_QUEUE_SIZE);
        let ui_config = UIConfig::new(with_background_color, api.api_url().to_string());
        Self {
            state: DashboardState::new(ui_config),
            loader: DashboardLoader::new(api, EventSender::new(event_sender)),
            event_receiver,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Starts a fresh load. The view shows `Pending` until this load, and not
    /// any earlier one, completes.
    pub fn load(&mut self) {
        let seq = self.state.begin_load();
        self.loader.spawn(seq);
    }

    /// Moves completed loads into the dashboard state and applies them.
    pub fn pump_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.add_event(event);
        }
        self.state.update();
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    // Initial load on mount
    app.load();

    // UI event loop
    loop {
        app.pump_events();
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::F(5) => app.load(),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::DashboardError;
    use crate::model::fixtures::{home_payload, payload_with_total};
    use crate::model::{DashboardPayload, ServiceStatus};
    use crate::ui::dashboard::LoadState;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    /// Backend whose first request is slow and every later one is fast.
    struct SlowFirstApi {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl DashboardApi for SlowFirstApi {
        fn api_url(&self) -> &str {
            "http://127.0.0.1:8000"
        }

        async fn get_dashboard(&self) -> Result<DashboardPayload, DashboardError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call == 0 {
                sleep(Duration::from_millis(150)).await;
                Ok(payload_with_total(42.0))
            } else {
                Ok(home_payload())
            }
        }

        async fn get_status(&self) -> Result<ServiceStatus, DashboardError> {
            unimplemented!("not used by the dashboard view")
        }
    }

    #[tokio::test]
    async fn test_rapid_reloads_show_the_most_recently_initiated_load() {
        let api = Arc::new(SlowFirstApi {
            calls: AtomicUsize::new(0),
        });
        let mut app = App::new(api, false);

        app.load();
        app.load();

        // Both responses arrive, the first one last.
        sleep(Duration::from_millis(400)).await;
        app.pump_events();

        assert_eq!(
            app.state().load_state(),
            &LoadState::Loaded(Box::new(home_payload()))
        );
    }

    #[tokio::test]
    async fn test_retry_after_failure_reissues_the_request() {
        let mut api = crate::api::MockDashboardApi::new();
        api.expect_api_url()
            .return_const("http://127.0.0.1:8000".to_string());
        let mut seq = mockall::Sequence::new();
        api.expect_get_dashboard()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Err(DashboardError::Http {
                    status: 500,
                    message: String::new(),
                })
            });
        api.expect_get_dashboard()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(home_payload()));

        let mut app = App::new(Arc::new(api), false);

        app.load();
        sleep(Duration::from_millis(100)).await;
        app.pump_events();
        assert!(matches!(app.state().load_state(), LoadState::Failed(_)));

        app.load();
        assert_eq!(app.state().load_state(), &LoadState::Pending);
        sleep(Duration::from_millis(100)).await;
        app.pump_events();
        assert!(matches!(app.state().load_state(), LoadState::Loaded(_)));
    }
}
