use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{ApiKey, Config};
use crate::page;
use crate::provider::{gemini::GeminiProvider, VisionProvider};
use crate::routes;

/// Shared, read-only state for every request.
#[derive(Clone)]
pub struct AppState {
    pub api_key: Option<ApiKey>,
    pub provider: Arc<dyn VisionProvider>,
}

impl AppState {
    /// State backed by the real Gemini API.
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            provider: Arc::new(GeminiProvider::new(&config.api_base, &config.model)),
        }
    }
}

pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/health", get(routes::health))
        .route("/api/roast", post(routes::roast))
        .route("/api/debug", get(routes::debug_models))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
