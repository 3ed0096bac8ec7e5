use anyhow::Result;
use backend::axum_http::http_serve;
use backend::config::config_loader;
use crates::infra::entity_api::EntityApiClient;
use std::sync::Arc;
use tracing::{error, info};
use url::Url;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Backend exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    crates::observability::init_observability("backend")?;

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    let entity_api = EntityApiClient::new(
        Url::parse(&dotenvy_env.entity_api.base_url)?,
        dotenvy_env.entity_api.api_key.clone(),
    );
    info!("Entity API client has been configured");

    http_serve::start(Arc::new(dotenvy_env), Arc::new(entity_api)).await?;

    Ok(())
}
