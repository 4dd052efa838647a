//! Prompt composition: maps the three pad offsets to the instruction string
//! sent to the image model.
//!
//! Pure and deterministic: identical offsets always produce the identical
//! string. The wording is part of the wire contract with the generation
//! model and must not be reworded. That includes the body phrase's
//! qualifier placement ("Turn the main subject's body slightly to face
//! up"), which reads awkwardly but is what the model was tuned against.

#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

use crate::consts::{DEADZONE_PX, SIGNIFICANT_RATIO, SLIGHT_RATIO};
use crate::pad::{Offset, PadKind};

/// Sent when every pad sits inside its deadzone.
pub const FALLBACK_PROMPT: &str =
    "Make a high-quality, photorealistic image of the subject, keeping the style the same.";

/// Direction label for one offset, vertical component first.
///
/// Each axis is compared against the deadzone independently and strictly:
/// a component at exactly the threshold contributes nothing. Both present
/// combines as e.g. "up and to the left".
fn direction_label(offset: Offset) -> String {
    let vertical = if offset.y < -DEADZONE_PX {
        "up"
    } else if offset.y > DEADZONE_PX {
        "down"
    } else {
        ""
    };
    let horizontal = if offset.x < -DEADZONE_PX {
        "left"
    } else if offset.x > DEADZONE_PX {
        "right"
    } else {
        ""
    };

    match (vertical.is_empty(), horizontal.is_empty()) {
        (false, false) => format!("{vertical} and to the {horizontal}"),
        (false, true) => vertical.to_owned(),
        (true, false) => horizontal.to_owned(),
        (true, true) => String::new(),
    }
}

/// Intensity qualifier from distance relative to the pad radius.
///
/// Trailing space included so templates can splice `{qualifier}{rest}`
/// without double spaces when the qualifier is absent.
fn intensity_qualifier(offset: Offset, radius: f64) -> &'static str {
    let distance = offset.distance();
    if distance > radius * SIGNIFICANT_RATIO {
        "significantly "
    } else if distance < radius * SLIGHT_RATIO {
        "slightly "
    } else {
        ""
    }
}

/// Compose the instruction string from the three current offsets.
///
/// Phrase order is fixed (head, body, gaze) for reproducibility; phrases
/// are joined with single spaces. Gaze never receives an intensity
/// qualifier. When no pad produces a direction, [`FALLBACK_PROMPT`] is
/// returned.
#[must_use]
pub fn compose(gaze: Offset, head: Offset, body: Offset) -> String {
    let mut phrases: Vec<String> = Vec::new();

    let head_dir = direction_label(head);
    if !head_dir.is_empty() {
        let qualifier = intensity_qualifier(head, PadKind::Head.radius());
        phrases.push(format!("Tilt the main subject's head {qualifier}{head_dir}."));
    }

    let body_dir = direction_label(body);
    if !body_dir.is_empty() {
        let qualifier = intensity_qualifier(body, PadKind::Body.radius());
        phrases.push(format!("Turn the main subject's body {qualifier}to face {body_dir}."));
    }

    let gaze_dir = direction_label(gaze);
    if !gaze_dir.is_empty() {
        phrases.push(format!("Make the subject look {gaze_dir}."));
    }

    if phrases.is_empty() {
        FALLBACK_PROMPT.to_owned()
    } else {
        phrases.join(" ")
    }
}
