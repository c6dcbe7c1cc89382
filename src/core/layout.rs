// Page boundaries the dots live in.
//
// Kept free of any host API: the web layer snapshots the page into
// `PageMetrics` and everything below is plain arithmetic on it.

use super::constants::*;

/// Offset box of an anchor element, in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorBox {
    pub top: f64,
    pub height: f64,
}

impl AnchorBox {
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Page geometry read once per layout change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageMetrics {
    pub viewport_width: f64,
    pub document_height: f64,
    pub start_anchor: Option<AnchorBox>,
    pub end_anchor: Option<AnchorBox>,
}

/// Closed interval `[start, end]` along one axis.
///
/// `start > end` is representable on purpose: a margin narrower than the
/// scrollbar buffer yields an inverted right rectangle and callers clamp
/// against it without panicking.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.start <= v && v <= self.end
    }

    /// `max(start, min(end, v))`. Unlike `f64::clamp` this never panics; on an
    /// inverted span it settles on `start`.
    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        v.min(self.end).max(self.start)
    }

    /// Point at fraction `t` of the way from `start` to `end`.
    #[inline]
    pub fn lerp(&self, t: f64) -> f64 {
        self.start + t * self.width()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// The two margin bands either side of the content column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarginRects {
    pub left: Span,
    pub right: Span,
}

impl MarginRects {
    #[inline]
    pub fn span(&self, side: Side) -> Span {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundaryRegion {
    pub vertical: Span,
    /// `None` when the viewport is no wider than the content column.
    pub margins: Option<MarginRects>,
}

impl BoundaryRegion {
    #[inline]
    pub fn has_margins(&self) -> bool {
        self.margins.is_some()
    }
}

/// Layout tuning; see `core::constants` for the defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub content_max_width: f64,
    pub scrollbar_buffer: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            content_max_width: CONTENT_MAX_WIDTH,
            scrollbar_buffer: SCROLLBAR_BUFFER,
        }
    }
}

/// Vertical band between the start anchor's top and the end anchor's bottom,
/// or the whole document when either anchor is absent.
pub fn vertical_bounds(metrics: &PageMetrics) -> Span {
    match (metrics.start_anchor, metrics.end_anchor) {
        (Some(start), Some(end)) => Span::new(start.top, end.bottom()),
        _ => Span::new(0.0, metrics.document_height),
    }
}

pub fn margin_rects(viewport_width: f64, params: &LayoutParams) -> Option<MarginRects> {
    if viewport_width <= params.content_max_width {
        return None;
    }
    let margin = (viewport_width - params.content_max_width) / 2.0;
    Some(MarginRects {
        left: Span::new(0.0, margin),
        right: Span::new(
            viewport_width - margin,
            viewport_width - params.scrollbar_buffer,
        ),
    })
}

pub fn compute_boundaries(metrics: &PageMetrics, params: &LayoutParams) -> BoundaryRegion {
    BoundaryRegion {
        vertical: vertical_bounds(metrics),
        margins: margin_rects(metrics.viewport_width, params),
    }
}
