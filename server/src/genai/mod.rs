//! Generation service: Gemini image-output client.
//!
//! DESIGN
//! ======
//! A thin HTTP wrapper with pure response parsing, configured from
//! environment variables. The server boots without a credential (generation
//! disabled, warning logged) and surfaces the missing key only when a
//! generation is attempted, so the static client can still be served.

pub mod config;
pub mod gemini;
pub mod types;

use std::sync::Arc;

use config::GenConfig;
pub use types::{GenError, GenerateImage};

/// Build the generation client from the environment.
///
/// Returns `None` (after logging why) when no credential is configured or
/// the HTTP client cannot be built; generation requests then fail with
/// `MissingCredential` at the route layer.
#[must_use]
pub fn client_from_env() -> Option<Arc<dyn GenerateImage>> {
    let config = match GenConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "generation client not configured; /api/generate disabled");
            return None;
        }
    };
    match gemini::GeminiClient::new(config) {
        Ok(client) => {
            tracing::info!(model = client.model(), "generation client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::error!(error = %e, "generation client failed to build");
            None
        }
    }
}
