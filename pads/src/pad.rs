//! Pad geometry and the per-pad drag state machine.
//!
//! A pad is a fixed-radius circular drag surface. Dragging its handle
//! produces an [`Offset`] from the pad center, clamped to the pad radius at
//! write time. Three pads exist (gaze, head, body); their drag sessions are
//! independent, so a gesture on one never disturbs another's offset.

#[cfg(test)]
#[path = "pad_test.rs"]
mod pad_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BODY_HANDLE_DIAMETER, BODY_PAD_DIAMETER, GAZE_PAD_DIAMETER, HEAD_PAD_DIAMETER,
    SMALL_HANDLE_DIAMETER,
};

/// A 2-D displacement from a pad's center, in CSS pixels.
///
/// Positive `x` is right, positive `y` is down (screen coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the pad center.
    #[must_use]
    pub fn distance(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rescale onto the boundary circle when the magnitude exceeds
    /// `radius`, preserving direction. An offset at the exact center stays
    /// `(0, 0)` with no division-by-zero branch.
    #[must_use]
    pub fn clamp_to_radius(self, radius: f64) -> Self {
        let dist = self.distance();
        if dist > radius && dist > 0.0 {
            let scale = radius / dist;
            Self::new(self.x * scale, self.y * scale)
        } else {
            self
        }
    }
}

/// Which of the three directional pads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PadKind {
    /// Where the subject's eyes point.
    Gaze,
    /// Head tilt.
    Head,
    /// Body orientation.
    Body,
}

impl PadKind {
    pub const ALL: [Self; 3] = [Self::Gaze, Self::Head, Self::Body];

    /// Fixed per-pad dimensions.
    #[must_use]
    pub fn config(self) -> PadConfig {
        match self {
            Self::Gaze => PadConfig {
                outer_diameter: GAZE_PAD_DIAMETER,
                handle_diameter: SMALL_HANDLE_DIAMETER,
            },
            Self::Head => PadConfig {
                outer_diameter: HEAD_PAD_DIAMETER,
                handle_diameter: SMALL_HANDLE_DIAMETER,
            },
            Self::Body => PadConfig {
                outer_diameter: BODY_PAD_DIAMETER,
                handle_diameter: BODY_HANDLE_DIAMETER,
            },
        }
    }

    /// Pad radius (half the outer diameter).
    #[must_use]
    pub fn radius(self) -> f64 {
        self.config().radius()
    }

    /// Display label for the pad.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Gaze => "Gaze",
            Self::Head => "Head",
            Self::Body => "Body",
        }
    }
}

/// Fixed dimensions for one pad. Set at pad creation, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadConfig {
    /// Diameter of the interactive circular surface, in CSS pixels.
    pub outer_diameter: f64,
    /// Diameter of the draggable handle, in CSS pixels.
    pub handle_diameter: f64,
}

impl PadConfig {
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.outer_diameter / 2.0
    }
}

/// Drag state for one pad.
///
/// `begin` / `drag_to` / `end` mirror the pointer-down / move / up
/// lifecycle. `drag_to` is a no-op without an active session, so stray move
/// events after release are ignored. The offset is retained on release (no
/// snap-back) and only `reset` returns it to center.
#[derive(Debug, Clone, PartialEq)]
pub struct PadController {
    kind: PadKind,
    offset: Offset,
    dragging: bool,
}

impl PadController {
    #[must_use]
    pub fn new(kind: PadKind) -> Self {
        Self { kind, offset: Offset::default(), dragging: false }
    }

    /// Start a drag session for this pad.
    pub fn begin(&mut self) {
        self.dragging = true;
    }

    /// Move the handle to `raw` (a center-relative pointer vector).
    ///
    /// Clamps the magnitude to the pad radius preserving direction. This is
    /// the only place the offset is written during a gesture, so the
    /// invariant `offset.distance() <= radius` holds at all times.
    pub fn drag_to(&mut self, raw: Offset) {
        if !self.dragging {
            return;
        }
        self.offset = raw.clamp_to_radius(self.kind.radius());
    }

    /// End the drag session. The offset keeps its last value.
    pub fn end(&mut self) {
        self.dragging = false;
    }

    /// Return the handle to the pad center and end any active session.
    pub fn reset(&mut self) {
        self.offset = Offset::default();
        self.dragging = false;
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn kind(&self) -> PadKind {
        self.kind
    }
}
