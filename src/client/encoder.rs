//! Turns a picked file into a data-URL payload.

use std::fmt;
use thiserror::Error;

use super::upload::FileCandidate;
use crate::data_url::{split_payload, to_data_url, PayloadParts};

/// Shown to the user whatever actually went wrong while reading.
pub const PROCESSING_FAILED: &str = "processing failed";

/// An image read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub raw_bytes: Vec<u8>,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// `data:<mime>;base64,<data>` text as sent to `/api/roast`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrlPayload(String);

impl DataUrlPayload {
    pub fn from_image(image: &UploadedImage) -> Self {
        Self(to_data_url(&image.mime_type, &image.raw_bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parts(&self) -> PayloadParts<'_> {
        split_payload(&self.0)
    }
}

impl fmt::Display for DataUrlPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
#[error("{}", PROCESSING_FAILED)]
pub struct EncodeError(#[source] pub std::io::Error);

/// Read the whole file and encode it. Nothing is returned on a partial read.
pub async fn read_image(file: &FileCandidate) -> Result<UploadedImage, EncodeError> {
    let raw_bytes = tokio::fs::read(&file.path).await.map_err(EncodeError)?;
    Ok(UploadedImage {
        size_bytes: raw_bytes.len() as u64,
        mime_type: file.declared_type.clone(),
        raw_bytes,
    })
}

pub async fn encode_file(file: &FileCandidate) -> Result<DataUrlPayload, EncodeError> {
    let image = read_image(file).await?;
    tracing::debug!(
        path = %file.path.display(),
        mime_type = %image.mime_type,
        size_bytes = image.size_bytes,
        "encoded image"
    );
    Ok(DataUrlPayload::from_image(&image))
}
