//! Portfolio breakdown grid
//!
//! One card per category: glyph, percentage badge, amount, name and a bar

use super::super::utils::{card_columns, parse_category_color};
use crate::consts::cli_consts::layout::{CARD_HEIGHT, CARD_MIN_WIDTH, MAX_CARD_COLUMNS};
use crate::ui::presenter::CategoryCard;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the breakdown section, laying cards out in rows.
pub fn render_categories(f: &mut Frame, area: Rect, cards: &[CategoryCard]) {
    let block = Block::default()
        .title("Portfolio breakdown")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if cards.is_empty() {
        let empty = Paragraph::new("No categories to display")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, inner);
        return;
    }

    let columns = card_columns(inner.width, CARD_MIN_WIDTH, MAX_CARD_COLUMNS);
    let rows: Vec<&[CategoryCard]> = cards.chunks(columns).collect();

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            rows.iter()
                .map(|_| Constraint::Length(CARD_HEIGHT))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let column_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                (0..columns)
                    .map(|_| Constraint::Ratio(1, columns as u32))
                    .collect::<Vec<_>>(),
            )
            .split(*row_area);

        for (card, card_area) in row.iter().zip(column_areas.iter()) {
            render_card(f, *card_area, card);
        }
    }
}

/// Render a single category card.
fn render_card(f: &mut Frame, area: Rect, card: &CategoryCard) {
    let color = parse_category_color(&card.color);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // glyph + percentage badge
            Constraint::Length(1), // amount
            Constraint::Length(1), // name
            Constraint::Length(1), // bar
        ])
        .split(inner);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(chunks[0]);
    f.render_widget(
        Paragraph::new(card.icon.glyph())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        top[0],
    );
    f.render_widget(
        Paragraph::new(card.percent_label())
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Gray)),
        top[1],
    );

    f.render_widget(
        Paragraph::new(card.amount.clone()).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            card.name.clone(),
            Style::default().fg(Color::Gray),
        ))),
        chunks[2],
    );

    let bar = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .ratio(card.bar_ratio())
        .label("");
    f.render_widget(bar, chunks[3]);
}
