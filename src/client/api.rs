use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::encoder::DataUrlPayload;
use crate::models::{ErrorResponse, RoastRequest, RoastResponse};

/// Used when the server rejects a request without saying why.
pub const REQUEST_FAILED: &str = "failed to process image";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with an error status. Displays the server's message.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Transport(String),
}

/// Anything that can turn a staged image into a roast.
#[async_trait]
pub trait RoastApi: Send + Sync {
    async fn roast(&self, image: &DataUrlPayload) -> Result<String, ClientError>;
}

/// Talks to a running server's `/api/roast`.
pub struct HttpRoastApi {
    client: Client,
    base_url: String,
}

impl HttpRoastApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RoastApi for HttpRoastApi {
    async fn roast(&self, image: &DataUrlPayload) -> Result<String, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/roast", self.base_url))
            .json(&RoastRequest {
                image: Some(image.as_str().to_string()),
            })
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let body: RoastResponse = response
                .json()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()))?;
            return Ok(body.roasting);
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.error)
            .filter(|error| !error.is_empty())
            .unwrap_or_else(|| REQUEST_FAILED.to_string());
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
