#![allow(dead_code)]

use ai_image_roaster::config::ApiKey;
use ai_image_roaster::provider::{InlineImage, ProviderError, VisionProvider};
use ai_image_roaster::startup::AppState;
use async_trait::async_trait;
use secrecy::Secret;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Reply = Box<dyn Fn() -> Result<String, ProviderError> + Send + Sync>;
type ModelsReply = Box<dyn Fn() -> Result<serde_json::Value, ProviderError> + Send + Sync>;

/// In-memory provider that records every call.
pub struct StubProvider {
    reply: Reply,
    models: ModelsReply,
    calls: AtomicUsize,
    seen: Mutex<Vec<(InlineImage, String)>>,
}

impl StubProvider {
    pub fn replying(reply: impl Fn() -> Result<String, ProviderError> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            reply: Box::new(reply),
            models: Box::new(|| Ok(serde_json::json!({ "models": [] }))),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn with_models(
        models: impl Fn() -> Result<serde_json::Value, ProviderError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            reply: Box::new(|| Ok(String::new())),
            models: Box::new(models),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_image(&self) -> Option<InlineImage> {
        self.seen.lock().unwrap().last().map(|(image, _)| image.clone())
    }

    pub fn last_instruction(&self) -> Option<String> {
        self.seen
            .lock()
            .unwrap()
            .last()
            .map(|(_, instruction)| instruction.clone())
    }
}

#[async_trait]
impl VisionProvider for StubProvider {
    async fn generate(
        &self,
        _api_key: &ApiKey,
        image: &InlineImage,
        instruction: &str,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((image.clone(), instruction.to_string()));
        (self.reply)()
    }

    async fn list_models(&self, _api_key: &ApiKey) -> Result<serde_json::Value, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.models)()
    }
}

pub fn state_with_key(provider: Arc<StubProvider>) -> AppState {
    AppState {
        api_key: Some(Secret::new("test-key".to_string())),
        provider,
    }
}

pub fn state_without_key(provider: Arc<StubProvider>) -> AppState {
    AppState {
        api_key: None,
        provider,
    }
}

pub fn api_error(status: u16, reason: Option<&str>, message: Option<&str>) -> ProviderError {
    ProviderError::Api {
        status,
        status_text: "test".to_string(),
        reason: reason.map(String::from),
        message: message.map(String::from),
        body: message.unwrap_or_default().to_string(),
    }
}
