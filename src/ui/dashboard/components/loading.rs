//! Loading indicator shown while a load is pending

use super::super::state::DashboardState;
use super::super::utils::spinner_frame;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render_loading(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", spinner_frame(state.tick)),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Loading data...", Style::default().fg(Color::Gray)),
    ]);

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), chunks[1]);
}
