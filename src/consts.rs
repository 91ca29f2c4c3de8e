pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard client,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 50;

    /// Maximum number of buffered loader events waiting for the UI loop
    pub const EVENT_QUEUE_SIZE: usize = 32;

    // =============================================================================
    // BACKEND CONFIGURATION
    // =============================================================================

    /// Base URL used when neither the command line nor the config file names one
    pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

    /// Endpoint serving the net-worth summary
    pub const DASHBOARD_ENDPOINT: &str = "api/dashboard";

    /// Endpoint serving the backend liveness report
    pub const STATUS_ENDPOINT: &str = "";

    /// The single message shown to the user for any failed load
    pub const FAILURE_MESSAGE: &str = "Could not connect to the server. Is the backend running?";

    /// Directory (under the user's home) holding the config file
    pub const CONFIG_DIR: &str = ".wealth-dashboard";

    /// Name of the config file
    pub const CONFIG_FILE: &str = "config.json";

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod network {
        use std::time::Duration;

        /// Maximum time to establish a connection to the backend (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Maximum time for a whole request, body included (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the connect timeout
        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // LAYOUT CONFIGURATION
    // =============================================================================

    pub mod layout {
        /// Height of a single category card, borders included
        pub const CARD_HEIGHT: u16 = 6;

        /// Narrowest a category card may get before the grid drops a column
        pub const CARD_MIN_WIDTH: u16 = 26;

        /// Upper bound on cards per grid row
        pub const MAX_CARD_COLUMNS: usize = 4;

        /// Width of the text bar printed in headless mode
        pub const TEXT_BAR_WIDTH: usize = 20;
    }
}
