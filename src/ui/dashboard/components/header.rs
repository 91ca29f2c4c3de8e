//! Dashboard header component
//!
//! Renders the title, snapshot subtitle and refresh hint

use super::super::state::{DashboardState, LoadState};
use super::super::utils::format_compact_timestamp;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and last update time.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let title = Paragraph::new(format!("FAMILY WEALTH v{}", env!("CARGO_PKG_VERSION")))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let updated = match (state.load_state(), state.last_updated()) {
        (LoadState::Loaded(_), Some(timestamp)) => {
            format!("updated {}", format_compact_timestamp(timestamp))
        }
        _ => "waiting for data".to_string(),
    };

    let subtitle = Paragraph::new(Line::from(vec![
        Span::styled("Current snapshot", Style::default().fg(Color::Gray)),
        Span::styled(
            format!(" ({})", updated),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(subtitle, header_chunks[1]);
}
