mod api;
mod config;
mod consts;
mod error_classifier;
mod events;
mod logging;
mod model;
mod money;
mod session;
mod ui;
mod workers;

use crate::config::{Config, get_config_path, validate_api_url};
use crate::session::{run_headless_mode, run_status_check, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Family net-worth dashboard for the terminal
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Base URL of the wealth backend. Overrides the config file.
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Paint a dark background behind the dashboard
        #[arg(long, action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Fetch the summary once and print it
    Summary {
        /// Base URL of the wealth backend. Overrides the config file.
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Check whether the backend is online
    Status {
        /// Base URL of the wealth backend. Overrides the config file.
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Save the backend URL to the config file
    SetApiUrl {
        /// Base URL of the wealth backend, e.g. http://127.0.0.1:8000
        #[arg(long, value_name = "URL")]
        url: String,
    },
    /// Delete the config file
    ResetConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    log::set_max_level(logging::get_rust_log_level().into());
    match args.command {
        Command::Start {
            api_url,
            with_background,
        } => {
            let session = setup_session(api_url)?;
            run_tui_mode(session, with_background).await
        }
        Command::Summary { api_url } => {
            let session = setup_session(api_url)?;
            run_headless_mode(session).await
        }
        Command::Status { api_url } => {
            let session = setup_session(api_url)?;
            run_status_check(session).await
        }
        Command::SetApiUrl { url } => {
            validate_api_url(&url)?;
            let config_path = get_config_path()?;
            Config::new(url.clone())
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Saved API URL {} to {}", url, config_path.display());
            Ok(())
        }
        Command::ResetConfig => {
            let config_path = get_config_path()?;
            println!("Removing configuration file {}...", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
