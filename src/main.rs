use alert_service::{api::run_api_server, config::Config};
use anyhow::{Error, Result, anyhow};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run_api_server(config)
        .await
        .map_err(|e| anyhow!("Server error: {}", e))?;

    Ok(())
}
