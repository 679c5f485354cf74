use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{config::Config, models::error::DispatchError};

/// Identity claims resolved from a caller's bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    pub id: String,

    #[serde(default)]
    pub email: Option<String>,
}

/// Resolves bearer tokens against the identity provider. A token is valid
/// only if the provider returns a claims document for it.
pub struct IdentityClient {
    http_client: Client,
    base_url: String,
}

impl IdentityClient {
    pub fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow::anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.identity_service_url, "Identity client initialized");

        Ok(Self {
            http_client,
            base_url: config.identity_service_url.clone(),
        })
    }

    pub async fn resolve_claims(&self, token: &str) -> Result<Claims, DispatchError> {
        let url = format!("{}/auth/v1/user", self.base_url);

        debug!("Resolving caller claims");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Identity provider unreachable");
                DispatchError::Auth("Could not verify token".to_string())
            })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Token rejected by identity provider");
            return Err(DispatchError::Auth("Invalid or expired token".to_string()));
        }

        let claims: Claims = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse claims document");
            DispatchError::Auth("Could not verify token".to_string())
        })?;

        debug!(user_id = %claims.id, "Caller claims resolved");

        Ok(claims)
    }

    /// Reachability probe for the health endpoint; any HTTP response counts.
    pub async fn ping(&self) -> Result<(), String> {
        let url = format!("{}/auth/v1/health", self.base_url);

        self.http_client
            .get(&url)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| format!("Identity provider unreachable: {}", e))
    }
}
