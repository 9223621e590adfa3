use serde::{Deserialize, Serialize};

/// Body of `POST /api/roast`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoastRequest {
    /// Data-URL or bare base64 image. Missing and empty are both rejected.
    #[serde(default)]
    pub image: Option<String>,
}

/// Successful `POST /api/roast` answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoastResponse {
    pub roasting: String,
}

/// Error body shared by every route. Only `error` is guaranteed.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub retryable: Option<bool>,
}
