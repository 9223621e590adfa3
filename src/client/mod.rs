//! Client side of the roast flow: pick a file, preview it, send it, show
//! the answer. The browser page in [`crate::page`] follows the same rules.

pub mod api;
pub mod encoder;
pub mod presenter;
pub mod session;
pub mod upload;

pub use api::{ClientError, HttpRoastApi, RoastApi};
pub use encoder::{DataUrlPayload, EncodeError, UploadedImage};
pub use presenter::{render, Body, Presentation};
pub use session::{Session, UiState};
pub use upload::{validate, DropZone, FileCandidate, ValidationError, MAX_UPLOAD_BYTES};
