//! REST helper for the generation endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<String, String>`: the edited image's data URL, or a
//! message ready for the error banner. Structured error bodies from the
//! server carry their message through verbatim; transport failures fall
//! back to a generic string.

use pads::api::{ApiErrorBody, GenerateRequest, GenerateResponse};

/// POST the original image and the composed prompt to `/api/generate`.
pub async fn post_generate(image: String, prompt: String) -> Result<String, String> {
    let request = GenerateRequest { image, prompt };
    let response = gloo_net::http::Request::post("/api/generate")
        .json(&request)
        .map_err(|err| format!("failed to encode request: {err}"))?
        .send()
        .await
        .map_err(|err| format!("request failed: {err}"))?;

    if !response.ok() {
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("generation request failed with status {}", response.status()),
        };
        return Err(message);
    }

    let body: GenerateResponse = response
        .json()
        .await
        .map_err(|err| format!("failed to decode response: {err}"))?;
    Ok(body.image)
}
