//! Wire types returned by the wealth backend.

use serde::{Deserialize, Serialize};

/// One line item of the net-worth composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Display label, e.g. "Real Estate".
    pub name: String,
    /// Value held in this category, in the payload's currency.
    pub value: f64,
    /// Display color as `#RRGGBB`.
    pub color: String,
    /// Key into the fixed icon set, if the category has one.
    pub icon: Option<String>,
}

/// Net-worth summary served by `GET /api/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPayload {
    pub total_net_worth: f64,
    pub liquid_capital: f64,
    pub currency: String,
    /// Ordered breakdown; the order is kept when rendering.
    pub breakdown: Vec<CategoryEntry>,
}

/// Liveness report served by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub project: String,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_backend_payload() {
        let json = r##"{
            "total_net_worth": 1000000,
            "liquid_capital": 200000.5,
            "currency": "ILS",
            "breakdown": [
                {"name": "Home", "value": 600000, "color": "#22c55e", "icon": "Home"},
                {"name": "Uncategorized", "value": 12.5, "color": "#cccccc", "icon": null}
            ]
        }"##;

        let payload: DashboardPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.total_net_worth, 1_000_000.0);
        assert_eq!(payload.liquid_capital, 200_000.5);
        assert_eq!(payload.breakdown.len(), 2);
        assert_eq!(payload.breakdown[0].icon.as_deref(), Some("Home"));
        assert_eq!(payload.breakdown[1].name, "Uncategorized");
        assert_eq!(payload.breakdown[1].icon, None);
    }

    #[test]
    fn test_rejects_payload_without_breakdown() {
        let json = r#"{"total_net_worth": 1, "liquid_capital": 1, "currency": "ILS"}"#;
        assert!(serde_json::from_str::<DashboardPayload>(json).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_value() {
        let json = r##"{
            "total_net_worth": 1, "liquid_capital": 1, "currency": "ILS",
            "breakdown": [{"name": "Cash", "value": "lots", "color": "#fff", "icon": null}]
        }"##;
        assert!(serde_json::from_str::<DashboardPayload>(json).is_err());
    }

    #[test]
    fn test_deserializes_service_status() {
        let json = r#"{"status": "System is online", "project": "Family Wealth OS"}"#;
        let status: ServiceStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.status, "System is online");
        assert_eq!(status.project, "Family Wealth OS");
    }
}
