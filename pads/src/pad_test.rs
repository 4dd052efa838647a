#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Offset
// =============================================================

#[test]
fn offset_default_is_origin() {
    let o = Offset::default();
    assert_eq!(o.x, 0.0);
    assert_eq!(o.y, 0.0);
}

#[test]
fn offset_distance() {
    assert!(approx_eq(Offset::new(3.0, 4.0).distance(), 5.0));
    assert!(approx_eq(Offset::new(0.0, 0.0).distance(), 0.0));
}

#[test]
fn clamp_inside_radius_is_identity() {
    let o = Offset::new(10.0, -20.0);
    assert_eq!(o.clamp_to_radius(64.0), o);
}

#[test]
fn clamp_at_exact_radius_is_identity() {
    let o = Offset::new(64.0, 0.0);
    assert_eq!(o.clamp_to_radius(64.0), o);
}

#[test]
fn clamp_beyond_radius_lands_on_boundary() {
    let clamped = Offset::new(300.0, 400.0).clamp_to_radius(64.0);
    assert!(approx_eq(clamped.distance(), 64.0));
}

#[test]
fn clamp_preserves_direction() {
    let raw = Offset::new(300.0, 400.0);
    let clamped = raw.clamp_to_radius(64.0);
    // Unit vectors match within floating-point tolerance.
    assert!(approx_eq(clamped.x / clamped.distance(), raw.x / raw.distance()));
    assert!(approx_eq(clamped.y / clamped.distance(), raw.y / raw.distance()));
}

#[test]
fn clamp_at_center_has_no_division_by_zero() {
    let clamped = Offset::new(0.0, 0.0).clamp_to_radius(64.0);
    assert_eq!(clamped, Offset::default());
}

#[test]
fn clamp_negative_quadrants() {
    let clamped = Offset::new(-500.0, -500.0).clamp_to_radius(80.0);
    assert!(approx_eq(clamped.distance(), 80.0));
    assert!(clamped.x < 0.0);
    assert!(clamped.y < 0.0);
}

// =============================================================
// PadKind / PadConfig
// =============================================================

#[test]
fn pad_dimensions_match_layout() {
    assert_eq!(PadKind::Gaze.config().outer_diameter, 128.0);
    assert_eq!(PadKind::Head.config().outer_diameter, 128.0);
    assert_eq!(PadKind::Body.config().outer_diameter, 160.0);
    assert_eq!(PadKind::Body.config().handle_diameter, 48.0);
}

#[test]
fn pad_radius_is_half_diameter() {
    assert_eq!(PadKind::Head.radius(), 64.0);
    assert_eq!(PadKind::Body.radius(), 80.0);
}

#[test]
fn pad_labels() {
    assert_eq!(PadKind::Gaze.label(), "Gaze");
    assert_eq!(PadKind::Head.label(), "Head");
    assert_eq!(PadKind::Body.label(), "Body");
}

#[test]
fn pad_kind_all_covers_each_variant_once() {
    assert_eq!(PadKind::ALL.len(), 3);
    for (i, a) in PadKind::ALL.iter().enumerate() {
        for (j, b) in PadKind::ALL.iter().enumerate() {
            assert_eq!(i == j, a == b);
        }
    }
}

// =============================================================
// PadController
// =============================================================

#[test]
fn controller_starts_centered_and_idle() {
    let c = PadController::new(PadKind::Gaze);
    assert_eq!(c.offset(), Offset::default());
    assert!(!c.is_dragging());
}

#[test]
fn drag_without_begin_is_ignored() {
    let mut c = PadController::new(PadKind::Gaze);
    c.drag_to(Offset::new(30.0, 30.0));
    assert_eq!(c.offset(), Offset::default());
}

#[test]
fn drag_writes_clamped_offset() {
    let mut c = PadController::new(PadKind::Head);
    c.begin();
    c.drag_to(Offset::new(1000.0, 0.0));
    assert!(approx_eq(c.offset().distance(), PadKind::Head.radius()));
}

#[test]
fn offset_magnitude_never_exceeds_radius() {
    let mut c = PadController::new(PadKind::Body);
    c.begin();
    for (x, y) in [(0.0, 0.0), (79.0, 0.0), (80.0, 0.0), (81.0, 0.0), (-400.0, 250.0), (1e6, -1e6)] {
        c.drag_to(Offset::new(x, y));
        assert!(c.offset().distance() <= PadKind::Body.radius() + EPSILON);
    }
}

#[test]
fn end_retains_last_offset() {
    let mut c = PadController::new(PadKind::Gaze);
    c.begin();
    c.drag_to(Offset::new(12.0, -8.0));
    c.end();
    assert_eq!(c.offset(), Offset::new(12.0, -8.0));
    assert!(!c.is_dragging());
}

#[test]
fn move_after_end_is_ignored() {
    let mut c = PadController::new(PadKind::Gaze);
    c.begin();
    c.drag_to(Offset::new(12.0, -8.0));
    c.end();
    c.drag_to(Offset::new(50.0, 50.0));
    assert_eq!(c.offset(), Offset::new(12.0, -8.0));
}

#[test]
fn reset_returns_to_center() {
    let mut c = PadController::new(PadKind::Body);
    c.begin();
    c.drag_to(Offset::new(40.0, 40.0));
    c.reset();
    assert_eq!(c.offset(), Offset::default());
    assert!(!c.is_dragging());
}

#[test]
fn pads_are_independent() {
    let mut gaze = PadController::new(PadKind::Gaze);
    let mut head = PadController::new(PadKind::Head);
    gaze.begin();
    gaze.drag_to(Offset::new(20.0, 0.0));
    head.drag_to(Offset::new(0.0, 30.0));
    assert_eq!(gaze.offset(), Offset::new(20.0, 0.0));
    assert_eq!(head.offset(), Offset::default());
}
