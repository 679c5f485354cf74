use std::sync::Arc;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    clients::{
        email::EmailClient, health::HealthChecker, identity::IdentityClient,
        whatsapp::WhatsAppClient,
    },
    config::Config,
    models::{
        alert::WhatsAppAlertRequest,
        error::DispatchError,
        health::HealthStatus,
        response::ApiResponse,
        survey::SurveyNotificationRequest,
        validation::validate_whatsapp_number,
    },
    templates, utils,
};

pub struct AppState {
    pub config: Config,
    identity_client: IdentityClient,
    health_checker: HealthChecker,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, anyhow::Error> {
        let identity_client = IdentityClient::new(&config)?;
        let health_checker = HealthChecker::new(config.clone());

        Ok(Self {
            config,
            identity_client,
            health_checker,
        })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/send-whatsapp-alert", post(send_whatsapp_alert))
        .route("/send-survey-notification", post(send_survey_notification))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("0.0.0.0:{}", config.server_port);
    let state = Arc::new(AppState::from_config(config)?);
    let app = build_router(state);

    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Alert dispatch server started");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_checker.check_all().await;

    let status_code = match health.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}

/// `POST /send-whatsapp-alert`. Fail-fast order: bearer header, claims
/// lookup, required fields, recipient shape, provider credentials, then the
/// single provider call.
async fn send_whatsapp_alert(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<WhatsAppAlertRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>, DispatchError> {
    let trace_id = utils::new_trace_id();

    // Auth first; the body is not examined until the caller is known.
    let token = utils::extract_bearer(&headers)?;
    let claims = state.identity_client.resolve_claims(token).await?;

    let Json(request) = body.map_err(|e| {
        DispatchError::Validation(format!("Invalid request body: {}", e.body_text()))
    })?;

    let to = request
        .to
        .as_deref()
        .filter(|to| !to.is_empty())
        .ok_or_else(|| DispatchError::Validation("Missing required field: to".to_string()))?;

    let alert_type = request
        .alert_type
        .ok_or_else(|| DispatchError::Validation("Missing required field: alertType".to_string()))?;

    validate_whatsapp_number(to)?;

    let whatsapp = WhatsAppClient::from_config(&state.config)?;

    let message = templates::alert::render(alert_type, &request.items, request.summary.as_ref());
    whatsapp.send_message(to, &message, &trace_id).await?;

    info!(
        user_id = %claims.id,
        alert_type = %alert_type,
        item_count = request.items.len(),
        trace_id,
        "WhatsApp alert dispatched"
    );

    Ok(Json(ApiResponse::ok("Alert sent".to_string())))
}

/// `POST /send-survey-notification`. No authentication on this endpoint;
/// the submitter email is the only validated field. Renders and sends the
/// operator summary and the submitter confirmation as two provider calls.
async fn send_survey_notification(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SurveyNotificationRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>, DispatchError> {
    let trace_id = utils::new_trace_id();

    let Json(request) = body.map_err(|e| {
        DispatchError::Validation(format!("Invalid request body: {}", e.body_text()))
    })?;

    let survey = request.survey_data.ok_or_else(|| {
        DispatchError::Validation("Missing required field: surveyData".to_string())
    })?;

    let submitter_email = survey
        .email
        .as_deref()
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| DispatchError::Validation("Missing submitter email".to_string()))?
        .to_string();

    let email_client = EmailClient::from_config(&state.config)?;

    let operator = templates::survey::render_operator_email(&survey);
    let confirmation = templates::survey::render_confirmation_email(&survey);

    email_client
        .send(
            &state.config.survey_operator_email,
            &operator.subject,
            &operator.html,
            &trace_id,
        )
        .await?;

    email_client
        .send(&submitter_email, &confirmation.subject, &confirmation.html, &trace_id)
        .await?;

    info!(trace_id, "Survey notification emails dispatched");

    Ok(Json(ApiResponse::ok("Survey notification sent".to_string())))
}
