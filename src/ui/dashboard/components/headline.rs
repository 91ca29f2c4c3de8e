//! Headline totals: net worth and liquid capital

use crate::ui::presenter::Headline;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_headline(f: &mut Frame, area: ratatui::layout::Rect, headline: &Headline) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_total(
        f,
        chunks[0],
        "Total net worth",
        &headline.net_worth,
        Color::LightBlue,
    );
    render_total(
        f,
        chunks[1],
        "Liquid capital",
        &headline.liquid_capital,
        Color::LightGreen,
    );
}

fn render_total(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    title: &str,
    amount: &str,
    accent: Color,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));

    let paragraph = Paragraph::new(amount.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .block(block);
    f.render_widget(paragraph, area);
}
