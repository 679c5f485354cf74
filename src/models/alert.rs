use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// Closed set of alert categories. Unknown wire values fail deserialization;
/// there is no fallback variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    LowStock,
    ExpiryWarning,
    WeeklySummary,
}

impl Display for AlertType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AlertType::LowStock => write!(f, "low_stock"),
            AlertType::ExpiryWarning => write!(f, "expiry_warning"),
            AlertType::WeeklySummary => write!(f, "weekly_summary"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertItem {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_level: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_expiry: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub total_items: i64,
    pub total_value: f64,
    pub stock_movements: i64,
}

/// Body of `POST /send-whatsapp-alert`. Required fields are optional at the
/// serde layer so their absence surfaces as a validation failure with a
/// proper envelope instead of a deserialize rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppAlertRequest {
    pub to: Option<String>,
    pub alert_type: Option<AlertType>,

    #[serde(default)]
    pub items: Vec<AlertItem>,

    pub summary: Option<AlertSummary>,
}
