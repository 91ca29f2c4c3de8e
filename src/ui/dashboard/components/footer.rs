//! Dashboard footer component
//!
//! Renders key hints and the most recent activity entry

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, get_level_color};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_type(BorderType::Thick);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(26)])
        .split(inner);

    let activity = match state.latest_activity() {
        Some(event) => Line::from(vec![
            Span::styled(
                format!("{} ", format_compact_timestamp(&event.timestamp)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                event.msg.clone(),
                Style::default().fg(get_level_color(event.log_level)),
            ),
        ]),
        None => Line::from(Span::styled(
            state.api_url.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(activity), chunks[0]);

    let keys = Paragraph::new("[R] Refresh | [Q] Quit")
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(keys, chunks[1]);
}
