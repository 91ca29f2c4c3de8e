//! Dashboard main renderer

use super::components::{categories, error_panel, footer, header, headline, loading};
use super::state::{DashboardState, LoadState};
use crate::ui::presenter::{Headline, category_cards};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    match state.load_state() {
        LoadState::Pending => loading::render_loading(f, main_chunks[1], state),
        LoadState::Failed(message) => error_panel::render_error_panel(f, main_chunks[1], message),
        LoadState::Loaded(payload) => {
            let content_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Fill(1)])
                .split(main_chunks[1]);

            headline::render_headline(f, content_chunks[0], &Headline::from_payload(payload));
            categories::render_categories(f, content_chunks[1], &category_cards(payload));
        }
    }

    footer::render_footer(f, main_chunks[2], state);
}
