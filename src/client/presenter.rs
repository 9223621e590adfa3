use std::fmt;

use super::session::UiState;

pub const PROMPT_TEXT: &str = "Pick or drop an image (JPG, PNG, WebP, GIF, max 10MB).";
pub const PREVIEW_TEXT: &str = "Image ready. Roast it?";
pub const LOADING_TEXT: &str = "Cooking up a roast...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body<'a> {
    Prompt,
    Preview,
    Spinner,
    Roast(&'a str),
    Error(&'a str),
}

/// What the user should see for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation<'a> {
    pub body: Body<'a>,
    /// A roast still on screen under an error from a rejected selection.
    pub kept_roast: Option<&'a str>,
    pub can_submit: bool,
    /// The "new upload" action.
    pub can_reset: bool,
}

pub fn render(state: &UiState) -> Presentation<'_> {
    let body = match state {
        UiState::Idle => Body::Prompt,
        UiState::Previewing { .. } => Body::Preview,
        UiState::Submitting { .. } => Body::Spinner,
        UiState::ResultReady { roast, .. } => Body::Roast(roast),
        UiState::ErrorReady { message, .. } => Body::Error(message),
    };
    let kept_roast = match state {
        UiState::ErrorReady { roast, .. } => roast.as_deref(),
        _ => None,
    };
    let staged = state.staged_image().is_some();

    Presentation {
        body,
        kept_roast,
        // Hidden while a roast is on screen.
        can_submit: staged
            && kept_roast.is_none()
            && matches!(
                state,
                UiState::Previewing { .. } | UiState::ErrorReady { .. }
            ),
        can_reset: !matches!(state, UiState::Idle | UiState::Submitting { .. }),
    }
}

impl fmt::Display for Presentation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(roast) = self.kept_roast {
            writeln!(f, "> \u{201c}{}\u{201d}", roast)?;
        }
        match self.body {
            Body::Prompt => f.write_str(PROMPT_TEXT)?,
            Body::Preview => f.write_str(PREVIEW_TEXT)?,
            Body::Spinner => f.write_str(LOADING_TEXT)?,
            Body::Roast(text) => write!(f, "> \u{201c}{}\u{201d}", text)?,
            Body::Error(message) => write!(f, "error: {}", message)?,
        }
        if self.can_reset {
            f.write_str("\n[new upload]")?;
        }
        Ok(())
    }
}
