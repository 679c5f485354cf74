use axum::http::{HeaderMap, header};
use reqwest::Client;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{error::DispatchError, survey::SurveyPayload};

/// Trace id minted per dispatch and bound into every log event for it.
pub fn new_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Pulls the bearer token out of the Authorization header. Runs before any
/// body inspection on authenticated endpoints.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, DispatchError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| DispatchError::Auth("Missing Authorization header".to_string()))?;

    let value = value
        .to_str()
        .map_err(|_| DispatchError::Auth("Malformed Authorization header".to_string()))?;

    let token = value.strip_prefix("Bearer ").ok_or_else(|| {
        DispatchError::Auth("Authorization header must carry a bearer token".to_string())
    })?;

    if token.is_empty() {
        return Err(DispatchError::Auth("Empty bearer token".to_string()));
    }

    Ok(token)
}

/// Caller-side survey notifier. Email is advisory: every failure is logged
/// and swallowed so the caller's own operation (persisting the submission)
/// never fails on it.
pub async fn notify_survey_best_effort(
    http_client: &Client,
    endpoint_base: &str,
    survey: &SurveyPayload,
) {
    let url = format!("{}/send-survey-notification", endpoint_base);
    let body = serde_json::json!({ "surveyData": survey });

    match http_client.post(&url).json(&body).send().await {
        Ok(response) if response.status().is_success() => {
            info!("Survey notification dispatched");
        }
        Ok(response) => {
            warn!(status = %response.status(), "Survey notification failed, continuing");
        }
        Err(e) => {
            warn!(error = %e, "Survey notification endpoint unreachable, continuing");
        }
    }
}
