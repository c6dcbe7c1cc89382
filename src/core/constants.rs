// Fixed layout and motion tuning for the margin dots.

// Layout
pub const CONTENT_MAX_WIDTH: f64 = 1200.0; // width of the centred page column
pub const SCROLLBAR_BUFFER: f64 = 20.0; // right rectangle stops short of the scrollbar

// Population
pub const NUM_DOTS: usize = 40;

// Idle drift
pub const DRIFT_RANGE: f64 = 50.0; // full width of the per-axis drift interval
pub const DRIFT_DAMPING: f64 = 0.005; // fraction of the drift vector applied per frame

// Pointer repulsion
pub const MOUSE_REPEL_DISTANCE: f64 = 150.0;
pub const MOUSE_REPEL_STRENGTH: f64 = 0.5;
pub const REPEL_GAIN: f64 = 20.0; // px of push at full strength and zero distance
