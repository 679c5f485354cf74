use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::response::ApiResponse;

/// Dispatch failure taxonomy. Each variant carries the operator-facing
/// detail; what reaches the caller is decided in `IntoResponse`.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Auth(String),

    #[error("Service not configured: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

impl DispatchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DispatchError::Validation(_) => StatusCode::BAD_REQUEST,
            DispatchError::Auth(_) => StatusCode::UNAUTHORIZED,
            DispatchError::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
            DispatchError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            DispatchError::Validation(_) => "validation_error",
            DispatchError::Auth(_) => "auth_error",
            DispatchError::Config(_) => "config_error",
            DispatchError::Provider(_) => "provider_error",
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        // Provider internals stay server-side; the caller gets a generic line.
        let message = match &self {
            DispatchError::Provider(_) => "Failed to deliver notification".to_string(),
            other => other.to_string(),
        };

        let body = ApiResponse::<()>::error(self.kind().to_string(), message);

        (self.status_code(), Json(body)).into_response()
    }
}
