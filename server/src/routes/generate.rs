//! Image generation endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to a status code plus an `ApiErrorBody` whose `error`
//! string the client shows verbatim. Input problems (missing or malformed
//! image) are rejected before any provider call is made; provider failures
//! pass the provider's message through. All failures are terminal for the
//! attempt; the client owns any retry by starting a new generation.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use pads::api::{ApiErrorBody, GenerateRequest, GenerateResponse};
use pads::payload::ImagePayload;
use tracing::{info, warn};

use crate::genai::GenError;
use crate::state::AppState;

type ApiError = (StatusCode, Json<ApiErrorBody>);

/// `POST /api/generate`: forward the original image and the composed prompt
/// to the generation provider; return the edited image as a data URL.
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Some(client) = &state.genai else {
        let err = GenError::MissingCredential;
        return Err(error_response(StatusCode::SERVICE_UNAVAILABLE, err.error_code(), &err.to_string()));
    };

    if body.image.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "E_MISSING_INPUT",
            "no image provided",
        ));
    }

    let payload = ImagePayload::from_data_url(&body.image)
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, "E_MALFORMED_PAYLOAD", &e.to_string()))?;

    info!(media_type = %payload.media_type, prompt_len = body.prompt.len(), "generation requested");

    match client.generate(&payload, &body.prompt).await {
        Ok(edited) => Ok(Json(GenerateResponse { image: edited.to_data_url() })),
        Err(err) => {
            warn!(error = %err, code = err.error_code(), "generation failed");
            Err(error_response(status_for(&err), err.error_code(), &err.to_string()))
        }
    }
}

fn status_for(err: &GenError) -> StatusCode {
    match err {
        GenError::MissingCredential => StatusCode::SERVICE_UNAVAILABLE,
        GenError::ApiResponse { status: 429, .. } => StatusCode::TOO_MANY_REQUESTS,
        _ => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(status: StatusCode, code: &str, message: &str) -> ApiError {
    (status, Json(ApiErrorBody { error: message.to_owned(), code: code.to_owned() }))
}
