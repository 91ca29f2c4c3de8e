//! Currency-aware formatting of money amounts.
//!
//! Amounts are shown with zero fractional digits and `,` thousands grouping.
//! Known currencies get their symbol as a prefix (`₪1,000,000`); any other code
//! is written after the number (`1,000,000 CHF`).

use std::str::FromStr;

/// Currency of a payload, parsed from its ISO code.
#[derive(Debug, Clone, PartialEq, Eq, Default, strum::EnumString, strum::AsRefStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    #[default]
    ILS, // Israeli New Shekel
    USD, // United States Dollar
    EUR, // Euro
    GBP, // Great British Pound
    JPY, // Japanese Yen
    /// Any code without a known symbol.
    #[strum(default)]
    Other(String),
}

impl Currency {
    /// Parses a payload currency code. Empty codes fall back to the default currency.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        if code.is_empty() {
            return Self::default();
        }
        // The `default` variant makes parsing infallible.
        Self::from_str(code).unwrap_or_else(|_| Self::Other(code.to_uppercase()))
    }

    /// Returns the ISO code, e.g. "ILS".
    ///
    /// Known codes come from the `strum::AsRefStr` derive.
    pub fn code(&self) -> String {
        match self {
            Self::Other(code) => code.to_uppercase(),
            known => AsRef::<str>::as_ref(known).to_string(),
        }
    }

    /// Returns the graphical symbol, if the currency has one.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::ILS => Some("₪"),
            Self::USD => Some("$"),
            Self::EUR => Some("€"),
            Self::GBP => Some("£"),
            Self::JPY => Some("¥"),
            Self::Other(_) => None,
        }
    }
}

/// Formats `amount` rounded to whole units, e.g. `₪1,234,568` or `-$12`.
pub fn format_money(amount: f64, currency: &Currency) -> String {
    if !amount.is_finite() {
        return "N/A".to_string();
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = group_thousands(&format!("{:.0}", rounded.abs()));

    match currency.symbol() {
        Some(symbol) => format!("{}{}{}", sign, symbol, digits),
        None => format!("{}{} {}", sign, digits, currency.code()),
    }
}

fn group_thousands(raw: &str) -> String {
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
