// The live dot field: boundaries, the current dot set and the last pointer
// position, owned by the frame loop and handed to each event handler.

use super::dots::{create_dots, Dot, DotParams};
use super::layout::{compute_boundaries, BoundaryRegion, LayoutParams, PageMetrics};
use super::motion::{step_dot, MotionParams};
use glam::DVec2;
use rand::Rng;

/// All fixed tuning, grouped by the stage that consumes it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldParams {
    pub layout: LayoutParams,
    pub dots: DotParams,
    pub motion: MotionParams,
}

#[derive(Clone, Debug, Default)]
pub struct DotField {
    pub params: FieldParams,
    region: BoundaryRegion,
    dots: Vec<Dot>,
    mouse: DVec2,
    epoch: u64,
}

impl DotField {
    pub fn new(params: FieldParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    pub fn region(&self) -> &BoundaryRegion {
        &self.region
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn mouse(&self) -> DVec2 {
        self.mouse
    }

    /// Number of layout changes applied so far; 0 before the first one.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Record the pointer position in viewport coordinates.
    pub fn set_mouse(&mut self, x: f64, y: f64) {
        self.mouse = DVec2::new(x, y);
    }

    /// Recompute boundaries and replace the whole dot set.
    pub fn relayout<R: Rng + ?Sized>(&mut self, metrics: &PageMetrics, rng: &mut R) -> &[Dot] {
        self.region = compute_boundaries(metrics, &self.params.layout);
        self.dots = create_dots(rng, &self.region, &self.params.dots);
        self.epoch += 1;
        log::debug!(
            "[layout] epoch={} dots={} margins={:?} vertical=({:.0},{:.0})",
            self.epoch,
            self.dots.len(),
            self.region.margins,
            self.region.vertical.start,
            self.region.vertical.end
        );
        &self.dots
    }

    /// Advance every dot by one frame. Returns false when there are no
    /// margins and nothing moved.
    pub fn step(&mut self, scroll_y: f64) -> bool {
        if !self.region.has_margins() {
            return false;
        }
        let region = self.region;
        let mouse = self.mouse;
        let motion = self.params.motion;
        for dot in &mut self.dots {
            dot.position = step_dot(dot, &region, mouse, scroll_y, &motion);
        }
        true
    }
}

/// CSS transform placing a dot at its viewport position.
pub fn transform_css(dot: &Dot, scroll_y: f64) -> String {
    let p = dot.viewport_position(scroll_y);
    format!("translate({}px, {}px)", p.x, p.y)
}
