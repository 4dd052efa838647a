//! Shared application state.
//!
//! `AppState` is injected into axum handlers via the `State` extractor. The
//! only shared resource is the generation provider; there is no database
//! and no per-session server state.

use std::sync::Arc;

use crate::genai::GenerateImage;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no API credential is configured at boot.
    pub genai: Option<Arc<dyn GenerateImage>>,
}

impl AppState {
    #[must_use]
    pub fn new(genai: Option<Arc<dyn GenerateImage>>) -> Self {
        Self { genai }
    }
}
