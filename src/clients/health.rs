use std::{collections::HashMap, time::Instant};

use chrono::Utc;
use tracing::{debug, warn};

use crate::{
    clients::identity::IdentityClient,
    config::Config,
    models::health::{HealthCheckResponse, HealthStatus, ServiceHealth},
};

pub struct HealthChecker {
    config: Config,
}

impl HealthChecker {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let mut checks = HashMap::new();

        checks.insert("identity_provider".to_string(), self.check_identity().await);
        checks.insert("whatsapp_provider".to_string(), self.check_whatsapp_config());
        checks.insert("email_provider".to_string(), self.check_email_config());

        let overall_status = Self::determine_overall_status(&checks);

        HealthCheckResponse {
            status: overall_status,
            timestamp: Utc::now(),
            checks,
        }
    }

    async fn check_identity(&self) -> ServiceHealth {
        let start = Instant::now();

        let client = match IdentityClient::new(&self.config) {
            Ok(client) => client,
            Err(e) => {
                warn!(error = %e, "Identity client creation failed");
                return ServiceHealth::unhealthy(format!("Client creation failed: {}", e));
            }
        };

        match client.ping().await {
            Ok(_) => {
                let elapsed = start.elapsed().as_millis() as u64;
                debug!(response_time_ms = elapsed, "Identity provider health check passed");
                ServiceHealth::healthy(elapsed)
            }
            Err(e) => {
                warn!(error = %e, "Identity provider health check failed");
                ServiceHealth::unhealthy(e)
            }
        }
    }

    // Credential presence only; no probe call is made against the paid
    // provider APIs from the health path.
    fn check_whatsapp_config(&self) -> ServiceHealth {
        match self.config.whatsapp_credentials() {
            Ok(_) => ServiceHealth::healthy(0),
            Err(_) => ServiceHealth::degraded("WhatsApp credentials not configured".to_string()),
        }
    }

    fn check_email_config(&self) -> ServiceHealth {
        match self.config.email_api_key() {
            Ok(_) => ServiceHealth::healthy(0),
            Err(_) => ServiceHealth::degraded("Email API key not configured".to_string()),
        }
    }

    fn determine_overall_status(checks: &HashMap<String, ServiceHealth>) -> HealthStatus {
        let has_unhealthy = checks
            .values()
            .any(|health| health.status == HealthStatus::Unhealthy);

        let has_degraded = checks
            .values()
            .any(|health| health.status == HealthStatus::Degraded);

        if has_unhealthy {
            HealthStatus::Unhealthy
        } else if has_degraded {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        }
    }
}
