//! File selection rules and the drag-and-drop target.

use image::ImageFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Declared type for files whose extension is not a known image format.
pub const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// A file the user picked or dropped, before it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub declared_type: String,
    pub size_bytes: u64,
}

impl FileCandidate {
    /// Stat a local file. The declared type comes from the extension, like a
    /// browser's `File.type`, and is not checked against the contents.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;
        Ok(Self {
            path: path.to_path_buf(),
            declared_type: declared_type(path).to_string(),
            size_bytes: metadata.len(),
        })
    }
}

pub fn declared_type(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_CONTENT_TYPE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("only image files are allowed.")]
    NotAnImage,

    #[error("maximum file size is 10MB.")]
    TooLarge,
}

/// Type check first, then size. The first failure wins.
pub fn validate(file: &FileCandidate) -> Result<(), ValidationError> {
    if !file.declared_type.starts_with("image/") {
        return Err(ValidationError::NotAnImage);
    }
    if file.size_bytes > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge);
    }
    Ok(())
}

/// Drop target state. Only tracks the "dragging" highlight; preventing the
/// browser's default navigation is the page's job.
#[derive(Debug, Default)]
pub struct DropZone {
    dragging: bool,
}

impl DropZone {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_enter(&mut self) {
        self.dragging = true;
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Only the first dropped file is kept.
    pub fn drop_files<I, F>(&mut self, files: I) -> Option<F>
    where
        I: IntoIterator<Item = F>,
    {
        self.dragging = false;
        files.into_iter().next()
    }
}
