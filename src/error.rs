use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::provider::{FailureKind, ProviderError};

pub const MISSING_CREDENTIAL: &str = "GOOGLE_API_KEY not found. Add it to your .env file";
pub const MISSING_IMAGE: &str = "image missing from request";
pub const INVALID_API_KEY: &str = "invalid API key";
pub const RATE_LIMITED: &str = "rate limit or quota reached, try again later";
pub const GENERIC_FAILURE: &str = "an error occurred while processing the image";
pub const MODEL_LIST_FAILED: &str = "failed to fetch model list";
pub const MODEL_LIST_ERROR: &str = "an error occurred while fetching the model list";

/// Errors surfaced by the HTTP routes. Every variant maps to exactly one
/// status code and a `{ "error": ... }` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("provider credential is not configured")]
    MissingCredential,

    #[error("{}", MISSING_IMAGE)]
    MissingImage,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("image is not valid base64")]
    InvalidImage,

    #[error("{}", INVALID_API_KEY)]
    InvalidApiKey,

    #[error("{}", RATE_LIMITED)]
    RateLimited,

    #[error("{}", .0.as_deref().unwrap_or(GENERIC_FAILURE))]
    Upstream(Option<String>),

    /// Model listing was refused upstream; status and body pass through.
    #[error("{}: {}", MODEL_LIST_FAILED, .status)]
    ModelListRejected {
        status: u16,
        status_text: String,
        details: String,
    },

    #[error("{}: {}", MODEL_LIST_ERROR, .0)]
    ModelListUnavailable(String),
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match crate::provider::classify(&err) {
            FailureKind::InvalidCredential => ApiError::InvalidApiKey,
            FailureKind::RateLimited => ApiError::RateLimited,
            FailureKind::Other(message) => ApiError::Upstream(message),
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    retryable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ErrorBody {
    fn new(error: impl Into<String>, code: &'static str) -> Self {
        Self {
            error: error.into(),
            code: Some(code),
            ..Default::default()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingCredential => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(MISSING_CREDENTIAL, "missing_credential"),
            ),
            ApiError::MissingImage => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(MISSING_IMAGE, "missing_image"),
            ),
            err @ (ApiError::InvalidBody(_) | ApiError::InvalidImage) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(err.to_string(), "invalid_request"),
            ),
            ApiError::InvalidApiKey => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new(INVALID_API_KEY, "invalid_api_key"),
            ),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorBody {
                    retryable: Some(true),
                    ..ErrorBody::new(RATE_LIMITED, "rate_limited")
                },
            ),
            ApiError::Upstream(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(
                    message.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
                    "upstream_error",
                ),
            ),
            ApiError::ModelListRejected {
                status,
                status_text,
                details,
            } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                ErrorBody {
                    status: Some(status),
                    status_text: Some(status_text),
                    details: Some(details),
                    ..ErrorBody::new(MODEL_LIST_FAILED, "upstream_error")
                },
            ),
            ApiError::ModelListUnavailable(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message: Some(message),
                    ..ErrorBody::new(MODEL_LIST_ERROR, "upstream_error")
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
