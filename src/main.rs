use std::sync::Arc;

use anyhow::Context;
use ocr_proxy::{config::Config, routes, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;
    if config.api_key.is_none() {
        tracing::warn!(
            "{} is not set; recognize requests will fail until it is configured",
            ocr_proxy::config::API_KEY_VAR
        );
    }
    tracing::debug!(?config, "configuration loaded");

    let bind_addr = config.bind_addr;
    let app = routes::create_router(&config);
    let state = Arc::new(AppState::new(config).context("building vision api client")?);
    let app = app.with_state(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;

    tracing::info!("OCR proxy listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
