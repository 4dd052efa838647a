//! Editor session: pad controllers, image slots, and the request lifecycle.
//!
//! DESIGN
//! ======
//! All mutation happens on the single UI thread, so the session is a plain
//! state machine with no interior mutability and can be unit-tested without
//! a browser harness. The async service round trip lives outside: callers
//! take the [`GenerationJob`] from `begin_generation`, perform the request,
//! then feed back `complete_generation` or `fail_generation`. Every failure
//! is terminal for the current attempt; there is no retry logic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::pad::{PadController, PadKind};
use crate::payload::{ImagePayload, PayloadError};
use crate::prompt;

/// Lifecycle of the current generation attempt. Exactly one is live at a
/// time; starting a new attempt overwrites prior success/failure state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl RequestState {
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// The failure message, when in the failed state.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Errors surfaced to the view from session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Generation requested with no original image loaded.
    #[error("no image loaded: upload a portrait first")]
    MissingInput,

    /// A generation request is already in flight.
    #[error("a generation request is already in flight")]
    GenerationInFlight,

    /// The uploaded file's media type is not supported.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// An encoded image string could not be decoded.
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// Everything the shell needs to run one generation round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationJob {
    /// The original image as a data URL.
    pub image_data_url: String,
    /// The composed instruction string.
    pub prompt: String,
}

/// The whole editor state behind the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    gaze: PadController,
    head: PadController,
    body: PadController,
    original: Option<ImagePayload>,
    edited: Option<ImagePayload>,
    request: RequestState,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            gaze: PadController::new(PadKind::Gaze),
            head: PadController::new(PadKind::Head),
            body: PadController::new(PadKind::Body),
            original: None,
            edited: None,
            request: RequestState::Idle,
        }
    }

    #[must_use]
    pub fn pad(&self, kind: PadKind) -> &PadController {
        match kind {
            PadKind::Gaze => &self.gaze,
            PadKind::Head => &self.head,
            PadKind::Body => &self.body,
        }
    }

    pub fn pad_mut(&mut self, kind: PadKind) -> &mut PadController {
        match kind {
            PadKind::Gaze => &mut self.gaze,
            PadKind::Head => &mut self.head,
            PadKind::Body => &mut self.body,
        }
    }

    /// Load a newly uploaded original image.
    ///
    /// Clears the edited slot, zeroes all three offsets, and clears any
    /// prior error state.
    ///
    /// # Errors
    ///
    /// Rejects payloads that fail to decode or carry an unsupported media
    /// type; the previous original is kept in that case.
    pub fn load_original(&mut self, data_url: &str) -> Result<(), SessionError> {
        let payload = ImagePayload::from_data_url(data_url)?;
        if !payload.is_accepted_upload() {
            return Err(SessionError::UnsupportedMediaType(payload.media_type));
        }
        self.original = Some(payload);
        self.edited = None;
        self.reset();
        Ok(())
    }

    /// Start a generation attempt.
    ///
    /// Clears the edited slot and moves to `InFlight`, returning the prompt
    /// and encoded image to send to the service.
    ///
    /// # Errors
    ///
    /// Rejects when an attempt is already in flight or no original image is
    /// loaded; in both cases no state changes and no service call should be
    /// made.
    pub fn begin_generation(&mut self) -> Result<GenerationJob, SessionError> {
        if self.request.is_in_flight() {
            return Err(SessionError::GenerationInFlight);
        }
        let Some(original) = &self.original else {
            return Err(SessionError::MissingInput);
        };
        let job = GenerationJob {
            image_data_url: original.to_data_url(),
            prompt: prompt::compose(self.gaze.offset(), self.head.offset(), self.body.offset()),
        };
        self.edited = None;
        self.request = RequestState::InFlight;
        Ok(job)
    }

    /// Record a successful service response.
    ///
    /// # Errors
    ///
    /// A returned payload that fails to decode marks the attempt failed (a
    /// partial or undecodable result is never displayed) and the decode
    /// error is returned.
    pub fn complete_generation(&mut self, data_url: &str) -> Result<(), SessionError> {
        match ImagePayload::from_data_url(data_url) {
            Ok(payload) => {
                self.edited = Some(payload);
                self.request = RequestState::Succeeded;
                Ok(())
            }
            Err(err) => {
                self.request = RequestState::Failed(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Record a failed attempt. The message is surfaced verbatim in the view.
    pub fn fail_generation(&mut self, message: impl Into<String>) {
        self.request = RequestState::Failed(message.into());
    }

    /// Report an input error from outside the generation lifecycle, such as
    /// a rejected upload.
    ///
    /// Unlike [`EditorSession::fail_generation`], an in-flight attempt keeps
    /// its state so the single-flight guard holds until the round trip
    /// settles; the message is dropped in that case and the caller should
    /// log it instead.
    pub fn report_input_error(&mut self, message: impl Into<String>) {
        if !self.request.is_in_flight() {
            self.request = RequestState::Failed(message.into());
        }
    }

    /// Zero all three offsets and clear error state. Loaded images stay.
    ///
    /// An in-flight request keeps its state so the single-flight guard
    /// still holds until the round trip settles.
    pub fn reset(&mut self) {
        self.gaze.reset();
        self.head.reset();
        self.body.reset();
        if !self.request.is_in_flight() {
            self.request = RequestState::Idle;
        }
    }

    /// Whether the generate action should be enabled in the view.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        self.original.is_some() && !self.request.is_in_flight()
    }

    #[must_use]
    pub fn original(&self) -> Option<&ImagePayload> {
        self.original.as_ref()
    }

    #[must_use]
    pub fn edited(&self) -> Option<&ImagePayload> {
        self.edited.as_ref()
    }

    #[must_use]
    pub fn request(&self) -> &RequestState {
        &self.request
    }
}
