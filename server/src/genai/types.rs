//! Generation service types: errors and the provider trait.

use pads::payload::ImagePayload;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the image generation service.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// No API credential is configured; no service call was made.
    #[error("image generation is not configured: set GEMINI_API_KEY")]
    MissingCredential,

    /// The HTTP request to the provider failed (transport level).
    #[error("generation request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status. `body` carries the
    /// provider's message so it can be surfaced verbatim.
    #[error("generation service error (status {status}): {body}")]
    ApiResponse { status: u16, body: String },

    /// The provider response body could not be deserialized.
    #[error("generation response parse failed: {0}")]
    ApiParse(String),

    /// A nominally successful response carried no image output.
    #[error("no image generated: the response may have been blocked")]
    NoImageReturned,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl GenError {
    /// Stable machine-readable identifier, surfaced in API error bodies.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredential => "E_MISSING_CREDENTIAL",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::NoImageReturned => "E_NO_IMAGE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }
}

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// One image-edit round trip: send the original plus an instruction, expect
/// image-modality output only. Implemented by the Gemini client and by test
/// stubs.
#[async_trait::async_trait]
pub trait GenerateImage: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`GenError`] on transport failure, non-success status,
    /// undecodable response, or a response with no image output.
    async fn generate(&self, image: &ImagePayload, prompt: &str) -> Result<ImagePayload, GenError>;
}
