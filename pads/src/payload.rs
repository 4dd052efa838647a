//! Self-describing encoded image payloads.
//!
//! Images cross every boundary in this system (file upload, generation
//! request, generation response) as RFC 2397 data URLs:
//! `data:<media type>;base64,<payload>`. This module owns the codec between
//! that form and raw bytes plus a media type.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Media types accepted for uploaded originals.
pub const ACCEPTED_MEDIA_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// Errors from decoding an encoded image string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    /// The encoded string is not of the `data:<media>;base64,<payload>` form.
    #[error("malformed image payload: {0}")]
    MalformedPayload(&'static str),
}

/// An image as raw bytes plus its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    #[must_use]
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { media_type: media_type.into(), bytes }
    }

    /// Encode as a data URL. Always succeeds for well-formed inputs.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, STANDARD.encode(&self.bytes))
    }

    /// Decode a data URL into media type + bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::MalformedPayload`] when the scheme, base64
    /// marker, or media type is missing, or the payload is not valid base64.
    pub fn from_data_url(encoded: &str) -> Result<Self, PayloadError> {
        let rest = encoded
            .strip_prefix("data:")
            .ok_or(PayloadError::MalformedPayload("missing data: scheme"))?;
        let (media_type, b64) = rest
            .split_once(";base64,")
            .ok_or(PayloadError::MalformedPayload("missing base64 marker"))?;
        if media_type.is_empty() {
            return Err(PayloadError::MalformedPayload("empty media type"));
        }
        let bytes = STANDARD
            .decode(b64)
            .map_err(|_| PayloadError::MalformedPayload("invalid base64 data"))?;
        Ok(Self { media_type: media_type.to_owned(), bytes })
    }

    /// Whether this payload's media type is accepted for upload.
    #[must_use]
    pub fn is_accepted_upload(&self) -> bool {
        ACCEPTED_MEDIA_TYPES.contains(&self.media_type.as_str())
    }
}
