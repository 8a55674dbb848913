//! Shared numeric and style constants for the drawing core.

// ── Hit-testing ─────────────────────────────────────────────────

/// Extra distance added to a line's stroke width when hit-testing, so that
/// hairline strokes stay clickable.
pub const LINE_HIT_SLACK: f64 = 5.0;

// ── New-shape defaults ──────────────────────────────────────────

/// Fill for freshly drawn rectangles and circles.
pub const DEFAULT_FILL_COLOR: &str = "#93C5FD";

/// Fill for freshly drawn lines. Lines never paint a fill.
pub const DEFAULT_LINE_FILL_COLOR: &str = "transparent";

/// Stroke color for freshly drawn shapes.
pub const DEFAULT_STROKE_COLOR: &str = "#1F2937";

/// Stroke width for freshly drawn shapes.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
