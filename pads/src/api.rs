//! Wire types for the generation endpoint, shared by client and server.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

/// `POST /api/generate` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Original image as a data URL.
    pub image: String,
    /// Composed instruction string, sent verbatim to the image model.
    pub prompt: String,
}

/// Successful response body: the edited image as a data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub image: String,
}

/// Error response body. `error` is shown verbatim in the view; `code` is a
/// stable machine-readable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub code: String,
}
