use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, info};

use crate::{
    config::{Config, WhatsAppCredentials},
    models::error::DispatchError,
};

/// WhatsApp provider client. One message-send call per dispatch, no
/// retries; a non-success response is logged in full server-side and
/// surfaced to the caller as a generic provider failure.
pub struct WhatsAppClient {
    http_client: Client,
    api_base: String,
    credentials: WhatsAppCredentials,
}

impl WhatsAppClient {
    /// Fails with a config error when provider credentials are absent,
    /// which the endpoint reports as 503 rather than a provider failure.
    pub fn from_config(config: &Config) -> Result<Self, DispatchError> {
        let credentials = config.whatsapp_credentials()?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| DispatchError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_base: config.whatsapp_api_base.clone(),
            credentials,
        })
    }

    pub async fn send_message(
        &self,
        to: &str,
        body: &str,
        trace_id: &str,
    ) -> Result<(), DispatchError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base, self.credentials.account_sid
        );

        debug!(to, trace_id, "Sending WhatsApp message");

        let form = [
            ("To", format!("whatsapp:{}", to)),
            ("From", format!("whatsapp:{}", self.credentials.from)),
            ("Body", body.to_string()),
        ];

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.credentials.account_sid, Some(&self.credentials.auth_token))
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, trace_id, "WhatsApp provider call failed");
                DispatchError::Provider("WhatsApp provider unreachable".to_string())
            })?;

        if response.status().is_success() {
            info!(to, trace_id, "WhatsApp message accepted by provider");
            Ok(())
        } else {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();

            // Raw provider detail stays in the server log only.
            error!(%status, detail, trace_id, "WhatsApp provider rejected message");

            Err(DispatchError::Provider(format!(
                "Provider returned status {}",
                status
            )))
        }
    }
}
