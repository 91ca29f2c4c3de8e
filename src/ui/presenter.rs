//! Category presenter
//!
//! Turns a loaded payload into display-ready values: formatted amounts,
//! clamped percentages and icon glyphs. Shared by the TUI and headless output.

use crate::model::{CategoryEntry, DashboardPayload};
use crate::money::{Currency, format_money};

/// Closed set of category icons.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CategoryIcon {
    TrendingUp,
    Home,
    Shield,
    Banknote,
    /// Any identifier outside the set, or no identifier at all.
    Placeholder,
}

impl CategoryIcon {
    /// Resolves a backend icon key. Keys are case sensitive.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("Rocket") => Self::TrendingUp,
            Some("Home") => Self::Home,
            Some("Shield") => Self::Shield,
            Some("Banknote") => Self::Banknote,
            _ => Self::Placeholder,
        }
    }

    /// Single-column glyph drawn on the card.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::TrendingUp => "↗",
            Self::Home => "⌂",
            Self::Shield => "◆",
            Self::Banknote => "$",
            Self::Placeholder => "?",
        }
    }
}

/// Share of `total` held by `value`, in percent, rounded to one decimal.
///
/// Clamped to `[0, 100]`. A non-positive or non-finite total, or a non-finite
/// value, yields `0.0`.
pub fn share_of_total(value: f64, total: f64) -> f64 {
    if !total.is_finite() || total <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let percent = (value / total * 100.0).clamp(0.0, 100.0);
    (percent * 10.0).round() / 10.0
}

/// Formats a percentage the way cards show it, e.g. "60.0%".
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Headline totals shown above the category grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub net_worth: String,
    pub liquid_capital: String,
}

impl Headline {
    pub fn from_payload(payload: &DashboardPayload) -> Self {
        let currency = Currency::from_code(&payload.currency);
        Self {
            net_worth: format_money(payload.total_net_worth, &currency),
            liquid_capital: format_money(payload.liquid_capital, &currency),
        }
    }
}

/// Display model for a single category card.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCard {
    pub name: String,
    pub icon: CategoryIcon,
    pub amount: String,
    pub percent: f64,
    pub color: String,
}

impl CategoryCard {
    fn from_entry(entry: &CategoryEntry, total: f64, currency: &Currency) -> Self {
        Self {
            name: entry.name.clone(),
            icon: CategoryIcon::from_key(entry.icon.as_deref()),
            amount: format_money(entry.value, currency),
            percent: share_of_total(entry.value, total),
            color: entry.color.clone(),
        }
    }

    pub fn percent_label(&self) -> String {
        format_percent(self.percent)
    }

    /// Filled fraction of the card's bar, always within `[0, 1]`.
    pub fn bar_ratio(&self) -> f64 {
        self.percent / 100.0
    }
}

/// Builds one card per breakdown entry, in payload order.
pub fn category_cards(payload: &DashboardPayload) -> Vec<CategoryCard> {
    let currency = Currency::from_code(&payload.currency);
    payload
        .breakdown
        .iter()
        .map(|entry| CategoryCard::from_entry(entry, payload.total_net_worth, &currency))
        .collect()
}

/// Renders `ratio` as a fixed-width text bar, e.g. `[######    ]`.
pub fn text_bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), " ".repeat(width - filled))
}
