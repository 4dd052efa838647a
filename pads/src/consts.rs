//! Shared numeric constants for the pads crate.

// ── Pad geometry ────────────────────────────────────────────────

/// Outer diameter of the gaze pad, in CSS pixels.
pub const GAZE_PAD_DIAMETER: f64 = 128.0;

/// Outer diameter of the head pad, in CSS pixels.
pub const HEAD_PAD_DIAMETER: f64 = 128.0;

/// Outer diameter of the body pad, in CSS pixels.
pub const BODY_PAD_DIAMETER: f64 = 160.0;

/// Handle diameter for the gaze and head pads.
pub const SMALL_HANDLE_DIAMETER: f64 = 40.0;

/// Handle diameter for the body pad.
pub const BODY_HANDLE_DIAMETER: f64 = 48.0;

// ── Prompt thresholds ───────────────────────────────────────────

/// Minimum per-axis displacement before a directional phrase is produced.
/// A component at exactly this value is still inside the deadzone.
pub const DEADZONE_PX: f64 = 15.0;

/// Offsets beyond this fraction of the pad radius read as "significantly".
pub const SIGNIFICANT_RATIO: f64 = 0.75;

/// Offsets under this fraction of the pad radius read as "slightly".
pub const SLIGHT_RATIO: f64 = 0.40;
