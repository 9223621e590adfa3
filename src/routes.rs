use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::time::Instant;

use crate::data_url::split_payload;
use crate::error::ApiError;
use crate::models::{RoastRequest, RoastResponse};
use crate::provider::{InlineImage, ProviderError};
use crate::startup::AppState;

/// Instruction sent alongside every image.
pub const ROAST_INSTRUCTION: &str = "Analyze this image. Act as a sarcastic stand-up comedian \
and professional roaster. Give sharp, funny, insulting commentary about what is in the picture, \
using plenty of Indonesian slang. Three short sentences at most. Get straight to the point.";

/// Returned with a 200 when the model answers with nothing.
pub const EMPTY_ROAST_FALLBACK: &str = "failed to get roast";

/// `POST /api/roast`: one image in, one provider call, one roast out.
pub async fn roast(
    State(state): State<AppState>,
    payload: Result<Json<RoastRequest>, JsonRejection>,
) -> Result<Json<RoastResponse>, ApiError> {
    // Credential first, even before looking at the body.
    let api_key = state.api_key.as_ref().ok_or_else(|| {
        tracing::error!("roast requested but GOOGLE_API_KEY is not configured");
        ApiError::MissingCredential
    })?;

    let Json(request) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    let image = request
        .image
        .filter(|image| !image.is_empty())
        .ok_or(ApiError::MissingImage)?;

    let parts = split_payload(&image);
    let bytes = parts.decode().map_err(|err| {
        tracing::warn!(error = %err, "rejecting image payload that is not base64");
        ApiError::InvalidImage
    })?;
    let image = InlineImage {
        mime_type: parts.mime_type.to_string(),
        bytes,
    };

    let started = Instant::now();
    let result = state
        .provider
        .generate(api_key, &image, ROAST_INSTRUCTION)
        .await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(text) => {
            tracing::info!(
                mime_type = %image.mime_type,
                bytes = image.bytes.len(),
                elapsed_ms,
                empty = text.trim().is_empty(),
                "roast generated"
            );
            let roasting = if text.trim().is_empty() {
                EMPTY_ROAST_FALLBACK.to_string()
            } else {
                text
            };
            Ok(Json(RoastResponse { roasting }))
        }
        Err(err) => {
            tracing::warn!(error = %err, elapsed_ms, "roast failed");
            Err(err.into())
        }
    }
}

/// `GET /api/debug`: raw model list for the configured key.
pub async fn debug_models(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let api_key = state.api_key.as_ref().ok_or(ApiError::MissingCredential)?;

    match state.provider.list_models(api_key).await {
        Ok(models) => Ok(Json(models)),
        Err(ProviderError::Api {
            status,
            status_text,
            body,
            ..
        }) => {
            tracing::warn!(status, "model listing rejected upstream");
            Err(ApiError::ModelListRejected {
                status,
                status_text,
                details: body,
            })
        }
        Err(err) => {
            tracing::error!(error = %err, "model listing failed");
            Err(ApiError::ModelListUnavailable(err.to_string()))
        }
    }
}

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
