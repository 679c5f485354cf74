use crate::models::alert::{AlertItem, AlertSummary, AlertType};

use super::{MAX_RENDERED_ITEMS, sanitize};

pub const INVENTORY_URL: &str = "https://app.stockroomhq.com/inventory";

pub const MARKER_EXPIRED: &str = "🚨 EXPIRED";
pub const MARKER_URGENT: &str = "⚠️ URGENT";
pub const MARKER_UPCOMING: &str = "📅 Upcoming";

/// Maps whole days until expiry to an urgency marker. The value is trusted
/// as computed by the caller; no date arithmetic happens here.
pub fn urgency_marker(days_until_expiry: i64) -> &'static str {
    if days_until_expiry <= 0 {
        MARKER_EXPIRED
    } else if days_until_expiry <= 3 {
        MARKER_URGENT
    } else {
        MARKER_UPCOMING
    }
}

/// Renders the channel message for one alert. The match is exhaustive over
/// the closed alert-type enum; items beyond the render cap are dropped and
/// noted in a trailing line.
pub fn render(alert_type: AlertType, items: &[AlertItem], summary: Option<&AlertSummary>) -> String {
    let shown = &items[..items.len().min(MAX_RENDERED_ITEMS)];
    let overflow = items.len() - shown.len();

    let mut message = match alert_type {
        AlertType::LowStock => render_low_stock(shown),
        AlertType::ExpiryWarning => render_expiry_warning(shown),
        AlertType::WeeklySummary => render_weekly_summary(shown, summary),
    };

    if overflow > 0 {
        message.push_str(&format!("\n…and {} more", overflow));
    }

    message
}

fn low_stock_line(item: &AlertItem) -> String {
    format!(
        "• {}: {} left (reorder at {})",
        sanitize(&item.name),
        item.quantity.unwrap_or(0),
        item.reorder_level.unwrap_or(0),
    )
}

fn render_low_stock(items: &[AlertItem]) -> String {
    let mut lines = vec!["🔔 *Low Stock Alert*".to_string(), String::new()];

    for item in items {
        lines.push(low_stock_line(item));
    }

    lines.push(String::new());
    lines.push(format!("Restock now: {}", INVENTORY_URL));

    lines.join("\n")
}

fn expiry_line(item: &AlertItem) -> String {
    let days = item.days_until_expiry.unwrap_or(0);
    let marker = urgency_marker(days);
    let name = sanitize(&item.name);

    let when = if days <= 0 {
        String::new()
    } else if days == 1 {
        " expires in 1 day".to_string()
    } else {
        format!(" expires in {} days", days)
    };

    match &item.expiry_date {
        Some(date) => format!("• {}: {}{} ({})", marker, name, when, sanitize(date)),
        None => format!("• {}: {}{}", marker, name, when),
    }
}

fn render_expiry_warning(items: &[AlertItem]) -> String {
    let mut lines = vec!["⏰ *Expiry Alert*".to_string(), String::new()];

    for item in items {
        lines.push(expiry_line(item));
    }

    lines.join("\n")
}

fn render_weekly_summary(items: &[AlertItem], summary: Option<&AlertSummary>) -> String {
    let mut lines = vec!["📊 *Weekly Inventory Summary*".to_string(), String::new()];

    if let Some(summary) = summary {
        lines.push(format!("Total items: {}", summary.total_items));
        lines.push(format!("Inventory value: ₦{:.2}", summary.total_value));
        lines.push(format!("Stock movements: {}", summary.stock_movements));
    }

    if !items.is_empty() {
        lines.push(String::new());
        lines.push("Items needing attention:".to_string());

        for item in items {
            lines.push(low_stock_line(item));
        }
    }

    lines.join("\n")
}
