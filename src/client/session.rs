//! The upload → preview → roast flow as a single state value.

use super::api::{ClientError, RoastApi};
use super::encoder::{encode_file, DataUrlPayload};
use super::upload::{validate, FileCandidate};
use crate::error::GENERIC_FAILURE;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Previewing {
        image: DataUrlPayload,
    },
    Submitting {
        image: DataUrlPayload,
    },
    ResultReady {
        image: DataUrlPayload,
        roast: String,
    },
    /// A rejected selection keeps whatever image and roast were already
    /// shown; only the message is added.
    ErrorReady {
        image: Option<DataUrlPayload>,
        roast: Option<String>,
        message: String,
    },
}

impl UiState {
    pub fn staged_image(&self) -> Option<&DataUrlPayload> {
        match self {
            UiState::Idle => None,
            UiState::Previewing { image }
            | UiState::Submitting { image }
            | UiState::ResultReady { image, .. } => Some(image),
            UiState::ErrorReady { image, .. } => image.as_ref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Submitting { .. })
    }

    pub fn roast_result(&self) -> Option<&str> {
        match self {
            UiState::ResultReady { roast, .. } => Some(roast),
            UiState::ErrorReady { roast, .. } => roast.as_deref(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::ErrorReady { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// One user's session. At most one roast request is in flight.
#[derive(Debug, Default)]
pub struct Session {
    state: UiState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Reject a selection: set the error, leave everything else as it was.
    fn reject_selection(&mut self, message: impl Into<String>) {
        let image = self.state.staged_image().cloned();
        let roast = self.state.roast_result().map(str::to_string);
        self.state = UiState::ErrorReady {
            image,
            roast,
            message: message.into(),
        };
    }

    /// Validate and stage a file. Does not submit.
    ///
    /// Ignored while a request is in flight.
    pub async fn select(&mut self, file: &FileCandidate) {
        if self.state.is_loading() {
            return;
        }

        if let Err(err) = validate(file) {
            tracing::debug!(error = %err, declared_type = %file.declared_type, "file rejected");
            self.reject_selection(err.to_string());
            return;
        }

        match encode_file(file).await {
            Ok(image) => self.state = UiState::Previewing { image },
            Err(err) => {
                tracing::warn!(error = ?err, path = %file.path.display(), "could not read file");
                self.reject_selection(err.to_string());
            }
        }
    }

    /// Enter `Submitting` and hand back the payload to send. `None` when
    /// nothing is staged or a request is already out.
    pub fn begin_submit(&mut self) -> Option<DataUrlPayload> {
        if self.state.is_loading() {
            return None;
        }
        let image = self.state.staged_image()?.clone();
        self.state = UiState::Submitting {
            image: image.clone(),
        };
        Some(image)
    }

    /// Record the outcome of the request started by [`Session::begin_submit`].
    pub fn finish_submit(&mut self, outcome: Result<String, ClientError>) {
        let image = match &self.state {
            UiState::Submitting { image } => image.clone(),
            _ => return,
        };
        self.state = match outcome {
            Ok(roast) => UiState::ResultReady { image, roast },
            Err(err) => {
                let message = err.to_string();
                UiState::ErrorReady {
                    image: Some(image),
                    roast: None,
                    message: if message.is_empty() {
                        GENERIC_FAILURE.to_string()
                    } else {
                        message
                    },
                }
            }
        };
    }

    /// Send the staged image. Returns `false` if the call was a no-op.
    pub async fn submit<A>(&mut self, api: &A) -> bool
    where
        A: RoastApi + ?Sized,
    {
        let Some(image) = self.begin_submit() else {
            return false;
        };
        let outcome = api.roast(&image).await;
        self.finish_submit(outcome);
        true
    }

    /// Back to `Idle`, dropping image, result and error. Ignored while loading.
    pub fn reset(&mut self) {
        if !self.state.is_loading() {
            self.state = UiState::Idle;
        }
    }
}
