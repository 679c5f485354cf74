use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::{config::Config, models::error::DispatchError};

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// Transactional email client. Each rendered document is one provider
/// call; failures are logged in full and surfaced generically.
pub struct EmailClient {
    http_client: Client,
    api_base: String,
    api_key: String,
    from: String,
}

impl EmailClient {
    pub fn from_config(config: &Config) -> Result<Self, DispatchError> {
        let api_key = config.email_api_key()?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| DispatchError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_base: config.email_api_base.clone(),
            api_key,
            from: config.email_from.clone(),
        })
    }

    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        html: &str,
        trace_id: &str,
    ) -> Result<(), DispatchError> {
        let url = format!("{}/emails", self.api_base);

        debug!(to, subject, trace_id, "Sending transactional email");

        let request = SendEmailRequest {
            from: &self.from,
            to: [to],
            subject,
            html,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, trace_id, "Email provider call failed");
                DispatchError::Provider("Email provider unreachable".to_string())
            })?;

        if response.status().is_success() {
            info!(to, trace_id, "Email accepted by provider");
            Ok(())
        } else {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();

            error!(%status, detail, trace_id, "Email provider rejected message");

            Err(DispatchError::Provider(format!(
                "Provider returned status {}",
                status
            )))
        }
    }
}
