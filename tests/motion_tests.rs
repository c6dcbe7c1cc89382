// Host-side tests for the per-frame motion step.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod dots {
        include!("../src/core/dots.rs");
    }
    pub mod motion {
        include!("../src/core/motion.rs");
    }
}

use crate::core::dots::*;
use crate::core::layout::*;
use crate::core::motion::*;
use glam::DVec2;

fn region() -> BoundaryRegion {
    BoundaryRegion {
        vertical: Span::new(500.0, 4300.0),
        margins: Some(MarginRects {
            left: Span::new(0.0, 200.0),
            right: Span::new(1400.0, 1580.0),
        }),
    }
}

fn dot(x: f64, y: f64, side: Side) -> Dot {
    Dot {
        position: DVec2::new(x, y),
        side,
        drift: DVec2::ZERO,
        size: SizeClass::Medium,
    }
}

#[test]
fn no_push_at_or_beyond_repel_distance() {
    let params = MotionParams::default();
    let target = DVec2::new(100.0, 100.0);
    for d in [150.0, 150.5, 300.0, 10_000.0] {
        let push = repel(target, target + DVec2::new(d, 0.0), &params);
        assert_eq!(push, DVec2::ZERO, "unexpected push at distance {d}");
    }
}

#[test]
fn no_push_when_pointer_sits_on_target() {
    let params = MotionParams::default();
    let target = DVec2::new(100.0, 100.0);
    assert_eq!(repel(target, target, &params), DVec2::ZERO);
}

#[test]
fn push_has_linear_falloff_and_points_away() {
    let params = MotionParams::default();
    let target = DVec2::new(100.0, 100.0);
    // pointer 75px to the right: half strength of 0.5 * 20, pushing left
    let push = repel(target, DVec2::new(175.0, 100.0), &params);
    assert!((push.x + 5.0).abs() < 1e-9, "push {push:?}");
    assert!(push.y.abs() < 1e-9);

    // pointer straight above (smaller y): push goes down
    let push = repel(target, DVec2::new(100.0, 70.0), &params);
    assert!(push.y > 0.0);
    assert!((push.length() - 10.0 * (1.0 - 30.0 / 150.0)).abs() < 1e-9);
}

#[test]
fn push_is_monotonic_in_proximity() {
    let params = MotionParams::default();
    let target = DVec2::new(0.0, 0.0);
    let dir = DVec2::new(3.0, 4.0).normalize();
    let mut prev = f64::INFINITY;
    for d in 1..150 {
        let mag = repel(target, dir * d as f64, &params).length();
        assert!(mag <= prev, "push grew from {prev} to {mag} at distance {d}");
        prev = mag;
    }
}

#[test]
fn idle_step_applies_damped_drift_only() {
    let params = MotionParams::default();
    let mut d = dot(100.0, 1000.0, Side::Left);
    d.drift = DVec2::new(20.0, -10.0);
    let far_mouse = DVec2::new(5000.0, 5000.0);
    let next = step_dot(&d, &region(), far_mouse, 0.0, &params);
    assert!((next.x - 100.1).abs() < 1e-9);
    assert!((next.y - 999.95).abs() < 1e-9);
}

#[test]
fn pointer_coincident_with_target_stays_finite() {
    let params = MotionParams::default();
    let d = dot(100.0, 1000.0, Side::Left);
    // scroll 600 puts the dot at viewport (100, 400)
    let next = step_dot(&d, &region(), DVec2::new(100.0, 400.0), 600.0, &params);
    assert!(next.x.is_finite() && next.y.is_finite());
    assert_eq!(next, d.position);
}

#[test]
fn scroll_offset_converts_target_to_viewport_space() {
    let params = MotionParams::default();
    let d = dot(100.0, 1000.0, Side::Left);
    let mouse = DVec2::new(150.0, 400.0);

    // scrolled so the dot is 50px left of the pointer: repelled
    let near = step_dot(&d, &region(), mouse, 600.0, &params);
    assert!(near.x < d.position.x);

    // unscrolled the dot is 600px below the pointer: untouched
    let far = step_dot(&d, &region(), mouse, 0.0, &params);
    assert_eq!(far, d.position);
}

#[test]
fn repelled_dot_is_clamped_to_its_side() {
    let params = MotionParams::default();
    let r = region();

    // left dot at its inner edge pushed toward the content column
    let left = dot(200.0, 1000.0, Side::Left);
    let next = step_dot(&left, &r, DVec2::new(190.0, 1000.0), 0.0, &params);
    assert_eq!(next.x, 200.0);

    // right dot at its inner edge pushed toward the content column
    let right = dot(1400.0, 1000.0, Side::Right);
    let next = step_dot(&right, &r, DVec2::new(1410.0, 1000.0), 0.0, &params);
    assert_eq!(next.x, 1400.0);
}

#[test]
fn dot_is_clamped_to_vertical_band() {
    let params = MotionParams::default();
    let d = dot(100.0, 500.0, Side::Left);
    // pointer just below the top edge pushes upward past it
    let next = step_dot(&d, &region(), DVec2::new(100.0, 510.0), 0.0, &params);
    assert_eq!(next.y, 500.0);
}

#[test]
fn inverted_right_span_settles_on_start() {
    let params = MotionParams::default();
    let r = BoundaryRegion {
        vertical: Span::new(0.0, 1000.0),
        margins: Some(MarginRects {
            left: Span::new(0.0, 5.0),
            right: Span::new(1205.0, 1190.0),
        }),
    };
    let d = dot(1195.0, 500.0, Side::Right);
    let next = step_dot(&d, &r, DVec2::new(-1000.0, -1000.0), 0.0, &params);
    assert_eq!(next.x, 1205.0);
}

#[test]
fn no_margins_leaves_dot_untouched() {
    let params = MotionParams::default();
    let r = BoundaryRegion {
        vertical: Span::new(0.0, 1000.0),
        margins: None,
    };
    let mut d = dot(100.0, 100.0, Side::Left);
    d.drift = DVec2::new(25.0, 25.0);
    assert_eq!(step_dot(&d, &r, DVec2::new(101.0, 101.0), 0.0, &params), d.position);
}
