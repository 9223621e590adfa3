//! Data-URL payload handling shared by the server and the client.
//!
//! A payload is either `data:<mime>;base64,<data>` or a bare base64 string.
//! Bare strings are tagged `image/jpeg`, whatever they actually contain.

use base64::alphabet;
use base64::engine::general_purpose::{self, GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use once_cell::sync::Lazy;
use regex::Regex;

/// MIME type assumed when the payload carries no usable `data:` prefix.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// Standard alphabet, padding optional.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// URL-safe alphabet, padding optional.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

static MIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"data:([^;]+)").expect("static regex is valid"));

/// A payload split into its MIME type and base64 body. Borrows from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadParts<'a> {
    pub mime_type: &'a str,
    pub data: &'a str,
}

impl PayloadParts<'_> {
    /// Decode the base64 body into raw image bytes.
    ///
    /// Accepts the standard and URL-safe alphabets, padded or not.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD_LENIENT
            .decode(self.data)
            .or_else(|err| URL_SAFE_LENIENT.decode(self.data).map_err(|_| err))
    }
}

/// Split a payload on its first comma.
///
/// The segment before the comma is searched for `data:<mime>`; without a comma
/// or without a match the MIME type stays [`DEFAULT_MIME_TYPE`].
pub fn split_payload(payload: &str) -> PayloadParts<'_> {
    match payload.split_once(',') {
        Some((prefix, data)) => {
            let mime_type = MIME_PATTERN
                .captures(prefix)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
                .unwrap_or(DEFAULT_MIME_TYPE);
            PayloadParts { mime_type, data }
        }
        None => PayloadParts {
            mime_type: DEFAULT_MIME_TYPE,
            data: payload,
        },
    }
}

/// Build a `data:<mime>;base64,<data>` string from raw bytes.
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        general_purpose::STANDARD.encode(bytes)
    )
}
