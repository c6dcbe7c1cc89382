// Per-frame motion: damped idle drift, pointer repulsion, clamping.

use super::constants::*;
use super::dots::Dot;
use super::layout::BoundaryRegion;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub drift_damping: f64,
    pub repel_distance: f64,
    pub repel_strength: f64,
    pub repel_gain: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            drift_damping: DRIFT_DAMPING,
            repel_distance: MOUSE_REPEL_DISTANCE,
            repel_strength: MOUSE_REPEL_STRENGTH,
            repel_gain: REPEL_GAIN,
        }
    }
}

/// Push applied to a point at `target` (viewport coordinates) by a pointer at
/// `mouse`. Linear falloff from `repel_strength * repel_gain` at distance 0 to
/// nothing at `repel_distance`.
///
/// Zero distance has no direction and yields no push.
pub fn repel(target: DVec2, mouse: DVec2, params: &MotionParams) -> DVec2 {
    let delta = mouse - target;
    let distance = delta.length();
    if !(distance > 0.0 && distance < params.repel_distance) {
        return DVec2::ZERO;
    }
    let factor = 1.0 - distance / params.repel_distance;
    let strength = factor * params.repel_strength * params.repel_gain;
    -(delta / distance) * strength
}

/// Next position of `dot` in document coordinates. `mouse` is in viewport
/// coordinates and `scroll_y` converts between the two.
///
/// Returns the current position untouched when the region has no margins.
pub fn step_dot(
    dot: &Dot,
    region: &BoundaryRegion,
    mouse: DVec2,
    scroll_y: f64,
    params: &MotionParams,
) -> DVec2 {
    let Some(margins) = region.margins else {
        return dot.position;
    };
    let mut target = dot.position + dot.drift * params.drift_damping;

    let target_viewport = DVec2::new(target.x, target.y - scroll_y);
    target += repel(target_viewport, mouse, params);

    target.y = region.vertical.clamp(target.y);
    target.x = margins.span(dot.side).clamp(target.x);
    target
}
