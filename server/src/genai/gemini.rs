//! Google Generative Language API client (image-output models).
//!
//! Thin HTTP wrapper for `models/{model}:generateContent` with an inline
//! image part, a text instruction part, and image-only response modality.
//! Pure parsing in `parse_response` for testability.

#[cfg(test)]
#[path = "gemini_test.rs"]
mod gemini_test;

use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use pads::payload::ImagePayload;

use super::config::GenConfig;
use super::types::{GenError, GenerateImage};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    config: GenConfig,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`GenError::HttpClientBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: GenConfig) -> Result<Self, GenError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| GenError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Configured model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait::async_trait]
impl GenerateImage for GeminiClient {
    async fn generate(&self, image: &ImagePayload, prompt: &str) -> Result<ImagePayload, GenError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = ApiRequest {
            contents: [Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: &image.media_type,
                            data: STANDARD.encode(&image.bytes),
                        }),
                        text: None,
                    },
                    Part { inline_data: None, text: Some(prompt) },
                ],
            }],
            generation_config: GenerationConfig { response_modalities: ["IMAGE"] },
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GenError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(GenError::ApiResponse { status, body: provider_message(&text) });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    contents: [Content<'a>; 1],
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(serde::Serialize)]
struct Part<'a> {
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

#[derive(serde::Serialize)]
struct InlineData<'a> {
    #[serde(rename = "mimeType")]
    mime_type: &'a str,
    data: String,
}

#[derive(serde::Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseModalities")]
    response_modalities: [&'static str; 1],
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(serde::Deserialize)]
struct ResponsePart {
    #[serde(rename = "inlineData")]
    inline_data: Option<ResponseInlineData>,
}

#[derive(serde::Deserialize)]
struct ResponseInlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the first inline image from a successful response body.
fn parse_response(json: &str) -> Result<ImagePayload, GenError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| GenError::ApiParse(e.to_string()))?;

    let inline = api
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|content| content.parts)
        .find_map(|part| part.inline_data)
        .ok_or(GenError::NoImageReturned)?;

    let bytes = STANDARD
        .decode(inline.data.as_bytes())
        .map_err(|e| GenError::ApiParse(format!("invalid inline image data: {e}")))?;
    Ok(ImagePayload::new(inline.mime_type, bytes))
}

/// Pull the human-readable message out of a provider error body, falling
/// back to the raw body when it is not the expected JSON shape.
fn provider_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }
    #[derive(serde::Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().to_owned(),
    }
}
