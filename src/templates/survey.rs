use crate::models::survey::SurveyPayload;

use super::sanitize;

pub const CONTACT_EMAIL: &str = "hello@stockroomhq.com";
pub const CONTACT_WHATSAPP: &str = "+234 801 234 5678";

/// Rewards promised to every survey participant. Fixed list, independent of
/// the submitted answers.
pub const SURVEY_REWARDS: [&str; 3] = [
    "Early access to StockRoom before public launch",
    "3 months of the Pro plan, free",
    "Priority onboarding for your team",
];

#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

fn field_value(value: &str) -> String {
    let clean = sanitize(value);
    if clean.trim().is_empty() {
        "Not provided".to_string()
    } else {
        clean
    }
}

fn list_value(values: &[String]) -> String {
    if values.is_empty() {
        return "Not provided".to_string();
    }
    values.iter().map(|v| sanitize(v)).collect::<Vec<_>>().join(", ")
}

fn field_row(label: &str, value: &str) -> String {
    format!(
        r#"<tr>
    <td style="padding: 8px 0; color: #6b7280; border-top: 1px solid #e5e7eb; white-space: nowrap; vertical-align: top;">{label}</td>
    <td style="padding: 8px 0 8px 16px; color: #111827; border-top: 1px solid #e5e7eb;">{value}</td>
</tr>"#
    )
}

fn wrap_document(header: &str, inner: &str, footer: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 20px; background-color: #f3f4f6;">
    <div style="max-width: 600px; margin: 0 auto; background-color: #ffffff; border-radius: 8px; overflow: hidden; box-shadow: 0 1px 3px rgba(0,0,0,0.1);">
        <div style="background-color: #0f766e; padding: 16px 24px;">
            <h1 style="color: #ffffff; margin: 0; font-size: 18px; font-weight: 600;">{header}</h1>
        </div>
        <div style="padding: 24px;">
{inner}
        </div>
        <div style="padding: 16px 24px; background-color: #f9fafb; border-top: 1px solid #e5e7eb;">
            <p style="margin: 0; font-size: 12px; color: #6b7280;">{footer}</p>
        </div>
    </div>
</body>
</html>"#
    )
}

/// Operator-facing notification enumerating every submitted field.
pub fn render_operator_email(survey: &SurveyPayload) -> RenderedEmail {
    let name = field_value(&survey.full_name);
    let email = survey.email.as_deref().map(field_value).unwrap_or_else(|| "Not provided".to_string());

    let rows = [
        field_row("Full name", &name),
        field_row("Email", &email),
        field_row("Phone", &field_value(&survey.phone)),
        field_row("Business type", &field_value(&survey.business_type)),
        field_row("Employees", &field_value(&survey.employee_count)),
        field_row("Location", &field_value(&survey.location)),
        field_row("Current method", &field_value(&survey.current_method)),
        field_row("Challenges", &list_value(&survey.challenges)),
        field_row("Other challenge", &field_value(&survey.other_challenge)),
        field_row("Desired features", &list_value(&survey.desired_features)),
        field_row("Budget range", &field_value(&survey.budget_range)),
        field_row("Launch interest", &field_value(&survey.launch_interest)),
        field_row("Comments", &field_value(&survey.comments)),
    ]
    .join("\n");

    let inner = format!(
        r#"<p style="margin: 0 0 16px 0; font-size: 14px; color: #374151;">A new market survey response just came in.</p>
<table style="width: 100%; border-collapse: collapse; font-size: 13px;">
{rows}
</table>"#
    );

    RenderedEmail {
        subject: format!("New survey response from {}", name),
        html: wrap_document(
            "New Survey Response",
            &inner,
            "Sent automatically by the StockRoom alert service.",
        ),
    }
}

/// Submitter-facing confirmation carrying the fixed reward list and contact
/// channels.
pub fn render_confirmation_email(survey: &SurveyPayload) -> RenderedEmail {
    let name = field_value(&survey.full_name);

    let reward_items = SURVEY_REWARDS
        .iter()
        .map(|reward| {
            format!(
                r#"<li style="margin: 0 0 8px 0; font-size: 14px; color: #374151;">{reward}</li>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let inner = format!(
        r#"<p style="margin: 0 0 16px 0; font-size: 14px; color: #374151;">Hi {name},</p>
<p style="margin: 0 0 16px 0; font-size: 14px; color: #374151;">Thank you for telling us how you run your inventory. Your answers shape what we build next. As a thank-you, you get:</p>
<ul style="margin: 0 0 24px 0; padding-left: 20px;">
{reward_items}
</ul>
<p style="margin: 0; font-size: 14px; color: #374151;">Questions? Reach us at <a href="mailto:{contact_email}" style="color: #0f766e;">{contact_email}</a> or on WhatsApp at {contact_whatsapp}.</p>"#,
        contact_email = CONTACT_EMAIL,
        contact_whatsapp = CONTACT_WHATSAPP,
    );

    RenderedEmail {
        subject: "Thanks for taking the StockRoom survey".to_string(),
        html: wrap_document(
            "You're on the list 🎉",
            &inner,
            "You received this email because you completed the StockRoom market survey.",
        ),
    }
}
