// Dot entities and the factory that populates the margins.

use super::constants::*;
use super::layout::{BoundaryRegion, Side};
use glam::DVec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    /// CSS class the page stylesheet sizes the element by.
    pub fn css_class(self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }
}

/// A single floating dot. `position` is in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub position: DVec2,
    pub side: Side,
    pub drift: DVec2,
    pub size: SizeClass,
}

impl Dot {
    /// Position relative to the viewport for the given scroll offset.
    #[inline]
    pub fn viewport_position(&self, scroll_y: f64) -> DVec2 {
        DVec2::new(self.position.x, self.position.y - scroll_y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotParams {
    pub count: usize,
    pub drift_range: f64,
}

impl Default for DotParams {
    fn default() -> Self {
        Self {
            count: NUM_DOTS,
            drift_range: DRIFT_RANGE,
        }
    }
}

/// Random drift in `[-range/2, range/2]` on each axis.
#[inline]
pub fn random_drift<R: Rng + ?Sized>(rng: &mut R, range: f64) -> DVec2 {
    DVec2::new(
        (rng.gen::<f64>() - 0.5) * range,
        (rng.gen::<f64>() - 0.5) * range,
    )
}

pub fn random_dot<R: Rng + ?Sized>(
    rng: &mut R,
    region: &BoundaryRegion,
    params: &DotParams,
) -> Option<Dot> {
    let margins = region.margins?;
    let side = if rng.gen_bool(0.5) { Side::Left } else { Side::Right };
    // lerp instead of gen_range: degenerate or inverted spans must not panic
    let x = margins.span(side).lerp(rng.gen::<f64>());
    let y = region.vertical.lerp(rng.gen::<f64>());
    let size = SizeClass::ALL[rng.gen_range(0..SizeClass::ALL.len())];
    Some(Dot {
        position: DVec2::new(x, y),
        side,
        drift: random_drift(rng, params.drift_range),
        size,
    })
}

/// Exactly `params.count` dots when the region has margins, none otherwise.
pub fn create_dots<R: Rng + ?Sized>(
    rng: &mut R,
    region: &BoundaryRegion,
    params: &DotParams,
) -> Vec<Dot> {
    if !region.has_margins() {
        return Vec::new();
    }
    (0..params.count)
        .filter_map(|_| random_dot(rng, region, params))
        .collect()
}
