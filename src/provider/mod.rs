//! Generative-AI provider abstraction.
//!
//! The router only talks to [`VisionProvider`]; the Gemini implementation
//! lives in [`gemini`] and tests plug in their own.

pub mod gemini;

use crate::config::ApiKey;
use async_trait::async_trait;
use thiserror::Error;

/// Image handed to the provider: raw bytes plus the MIME type they were tagged with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Failure reported by a provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider answered with a non-success HTTP status.
    #[error("provider returned {status}: {}", message.as_deref().unwrap_or(status_text))]
    Api {
        status: u16,
        status_text: String,
        /// Provider error status such as `RESOURCE_EXHAUSTED`, when it sent one.
        reason: Option<String>,
        message: Option<String>,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected provider response: {0}")]
    Decode(String),

    /// The model refused to answer, e.g. a safety block.
    #[error("response was blocked ({0})")]
    Blocked(String),
}

/// The closed set of failure categories the HTTP layer distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidCredential,
    RateLimited,
    /// Everything else, with the provider's message when there is one.
    Other(Option<String>),
}

/// Classify a provider failure.
///
/// Status codes win; message sniffing covers providers that report a bad key
/// as 400 "API key not valid" or a quota problem under another status.
pub fn classify(err: &ProviderError) -> FailureKind {
    let message = match err {
        ProviderError::Api { message, .. } => message.clone(),
        ProviderError::Network(msg) | ProviderError::Decode(msg) => Some(msg.clone()),
        blocked @ ProviderError::Blocked(_) => Some(blocked.to_string()),
    };
    let text = message.as_deref().unwrap_or_default();

    match err {
        ProviderError::Api { status: 401, .. } => FailureKind::InvalidCredential,
        ProviderError::Api { status: 429, .. } => FailureKind::RateLimited,
        ProviderError::Api {
            reason: Some(reason),
            ..
        } if reason == "RESOURCE_EXHAUSTED" => FailureKind::RateLimited,
        _ if text.contains("API key") => FailureKind::InvalidCredential,
        _ if text.contains("quota") => FailureKind::RateLimited,
        _ => FailureKind::Other(message.filter(|m| !m.is_empty())),
    }
}

/// A hosted model that can look at an image and talk about it.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Run one image + instruction generation. `Ok("")` means the model
    /// produced no text; callers decide what to show then.
    async fn generate(
        &self,
        api_key: &ApiKey,
        image: &InlineImage,
        instruction: &str,
    ) -> Result<String, ProviderError>;

    /// List the models visible to the credential, as the provider returns them.
    async fn list_models(&self, api_key: &ApiKey) -> Result<serde_json::Value, ProviderError>;
}
