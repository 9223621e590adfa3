// Web-based AI image roaster backed by Google Gemini.

use ai_image_roaster::config::Config;
use ai_image_roaster::startup::{build_router, AppState};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    if config.api_key.is_none() {
        tracing::warn!("GOOGLE_API_KEY is not set; /api/roast and /api/debug will answer 500");
    }

    let state = AppState::from_config(&config);
    let app = build_router(state, config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %config.bind_addr,
        model = %config.model,
        "🔥 roaster listening, open it in your browser"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
