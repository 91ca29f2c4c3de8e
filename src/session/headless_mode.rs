//! Headless mode execution
//!
//! Fetches the summary once and prints it as plain text.

use super::{
    SessionData,
    messages::{SessionMessage, print_session_starting},
};
use crate::api::DashboardApi;
use crate::consts::cli_consts::FAILURE_MESSAGE;
use crate::consts::cli_consts::layout::TEXT_BAR_WIDTH;
use crate::error_classifier::ErrorClassifier;
use crate::model::DashboardPayload;
use crate::ui::presenter::{Headline, category_cards, text_bar};
use crate::workers::loader::fetch_dashboard;
use std::error::Error;

/// Runs the application in headless mode
///
/// # Returns
/// * `Ok(())` - The summary was fetched and printed
/// * `Err` - The backend could not be reached or answered with a bad payload
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.api_url);

    let mut event = fetch_dashboard(session.client.as_ref(), 1).await;
    match event.payload.take() {
        Some(payload) => {
            for line in summary_lines(&payload) {
                println!("{}", line);
            }
            Ok(())
        }
        None => {
            SessionMessage::error(FAILURE_MESSAGE).print();
            eprintln!("{}", event);
            Err(Box::from(FAILURE_MESSAGE))
        }
    }
}

/// Probes the backend's liveness endpoint and prints its answer.
pub async fn run_status_check(session: SessionData) -> Result<(), Box<dyn Error>> {
    match session.client.get_status().await {
        Ok(status) => {
            SessionMessage::success(format!(
                "{} ({}) at {}",
                status.status, status.project, session.api_url
            ))
            .print();
            Ok(())
        }
        Err(e) => {
            let classifier = ErrorClassifier::new();
            SessionMessage::error(format!(
                "Backend at {} is unreachable: {}",
                session.api_url,
                classifier.describe(&e)
            ))
            .print();
            Err(Box::new(e))
        }
    }
}

/// Plain-text rendering of a loaded summary, one line per row.
pub fn summary_lines(payload: &DashboardPayload) -> Vec<String> {
    let headline = Headline::from_payload(payload);
    let cards = category_cards(payload);

    let mut lines = vec![
        format!("Total net worth: {}", headline.net_worth),
        format!("Liquid capital:  {}", headline.liquid_capital),
        String::new(),
        "Portfolio breakdown:".to_string(),
    ];

    if cards.is_empty() {
        lines.push("  No categories to display".to_string());
    }

    let name_width = cards
        .iter()
        .map(|card| card.name.chars().count())
        .max()
        .unwrap_or(0);
    let amount_width = cards
        .iter()
        .map(|card| card.amount.chars().count())
        .max()
        .unwrap_or(0);

    for card in &cards {
        lines.push(format!(
            "  {} {:<name_width$}  {:>amount_width$}  {:>6}  {}",
            card.icon.glyph(),
            card.name,
            card.amount,
            card.percent_label(),
            text_bar(card.bar_ratio(), TEXT_BAR_WIDTH),
        ));
    }
    lines
}
