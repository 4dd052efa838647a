//! Generation round trip: session guard, service call, terminal transition.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pads::session::{EditorSession, SessionError};

use crate::net::api;

/// Run one generation attempt. The session guard rejects double submission
/// and missing input before any network traffic happens.
pub fn run_generation(session: RwSignal<EditorSession>) {
    let Some(outcome) = session.try_update(EditorSession::begin_generation) else {
        return;
    };
    let job = match outcome {
        Ok(job) => job,
        // The button is disabled while in flight; a stray second click is a no-op.
        Err(SessionError::GenerationInFlight) => return,
        Err(err) => {
            session.update(|s| s.fail_generation(err.to_string()));
            return;
        }
    };

    spawn_local(async move {
        match api::post_generate(job.image_data_url, job.prompt).await {
            Ok(image) => session.update(|s| {
                if let Err(err) = s.complete_generation(&image) {
                    log::warn!("edited image rejected: {err}");
                }
            }),
            Err(message) => session.update(|s| s.fail_generation(message)),
        }
    });
}
