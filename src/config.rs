use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::models::error::DispatchError;

fn default_whatsapp_api_base() -> String {
    "https://api.twilio.com".to_string()
}

fn default_email_api_base() -> String {
    "https://api.resend.com".to_string()
}

fn default_email_from() -> String {
    "StockRoom <alerts@stockroomhq.com>".to_string()
}

fn default_operator_email() -> String {
    "ops@stockroomhq.com".to_string()
}

fn default_server_port() -> u16 {
    8080
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub identity_service_url: String,

    // Provider credentials are optional at load time. A dispatch that needs
    // an absent credential fails that request with a config error instead
    // of refusing to boot the whole service.
    pub twilio_account_sid: Option<String>,
    pub twilio_auth_token: Option<String>,
    pub twilio_whatsapp_from: Option<String>,

    pub resend_api_key: Option<String>,

    #[serde(default = "default_whatsapp_api_base")]
    pub whatsapp_api_base: String,

    #[serde(default = "default_email_api_base")]
    pub email_api_base: String,

    #[serde(default = "default_email_from")]
    pub email_from: String,

    #[serde(default = "default_operator_email")]
    pub survey_operator_email: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

#[derive(Clone, Debug)]
pub struct WhatsAppCredentials {
    pub account_sid: String,
    pub auth_token: String,
    pub from: String,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }

    pub fn whatsapp_credentials(&self) -> Result<WhatsAppCredentials, DispatchError> {
        match (
            self.twilio_account_sid.as_ref(),
            self.twilio_auth_token.as_ref(),
            self.twilio_whatsapp_from.as_ref(),
        ) {
            (Some(account_sid), Some(auth_token), Some(from)) => Ok(WhatsAppCredentials {
                account_sid: account_sid.clone(),
                auth_token: auth_token.clone(),
                from: from.clone(),
            }),
            _ => Err(DispatchError::Config(
                "WhatsApp provider credentials are not configured".to_string(),
            )),
        }
    }

    pub fn email_api_key(&self) -> Result<String, DispatchError> {
        self.resend_api_key.clone().ok_or_else(|| {
            DispatchError::Config("Email provider API key is not configured".to_string())
        })
    }
}
