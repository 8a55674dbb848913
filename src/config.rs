//! Editor configuration: default style for new shapes and interaction tuning.
//!
//! The host passes configuration as a JSON object. Every key is optional and
//! falls back to the constants in [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_FILL_COLOR, DEFAULT_LINE_FILL_COLOR, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH, LINE_HIT_SLACK,
};
use crate::doc::{LineStyle, Shape, ShapeId, ShapeKind};
use crate::geometry::Point;

/// Why an editor configuration was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The text is not a JSON object of known config keys.
    #[error("invalid editor config: {0}")]
    Parse(#[from] serde_json::Error),
    /// `strokeWidth` must be finite and positive.
    #[error("stroke width must be positive, got {0}")]
    StrokeWidth(f64),
    /// `lineHitSlack` must be finite and non-negative.
    #[error("line hit slack must be non-negative, got {0}")]
    LineHitSlack(f64),
    /// `minDrawExtent` must be finite and non-negative.
    #[error("minimum draw extent must be non-negative, got {0}")]
    MinDrawExtent(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Fill for new rectangles and circles.
    pub fill_color: String,
    /// Fill for new lines.
    pub line_fill_color: String,
    /// Stroke color for new shapes.
    pub stroke_color: String,
    /// Stroke width for new shapes.
    pub stroke_width: f64,
    /// Dash pattern for new shapes.
    pub line_style: LineStyle,
    /// Distance beyond a line's stroke width that still counts as a hit.
    pub line_hit_slack: f64,
    /// A drawn shape is discarded on release when both its width and height
    /// are below this. `0` keeps every drawn shape.
    pub min_draw_extent: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            fill_color: DEFAULT_FILL_COLOR.to_owned(),
            line_fill_color: DEFAULT_LINE_FILL_COLOR.to_owned(),
            stroke_color: DEFAULT_STROKE_COLOR.to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            line_style: LineStyle::Solid,
            line_hit_slack: LINE_HIT_SLACK,
            min_draw_extent: 0.0,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON, unknown keys, or
    /// out-of-range numbers.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric fields are in range.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(ConfigError::StrokeWidth(self.stroke_width));
        }
        if !(self.line_hit_slack.is_finite() && self.line_hit_slack >= 0.0) {
            return Err(ConfigError::LineHitSlack(self.line_hit_slack));
        }
        if !(self.min_draw_extent.is_finite() && self.min_draw_extent >= 0.0) {
            return Err(ConfigError::MinDrawExtent(self.min_draw_extent));
        }
        Ok(())
    }

    /// A new, unselected, zero-size shape of `kind` anchored at `at`, styled
    /// with these defaults.
    #[must_use]
    pub fn new_shape(&self, kind: ShapeKind, at: Point) -> Shape {
        let fill_color = match kind {
            ShapeKind::Rectangle | ShapeKind::Circle => self.fill_color.clone(),
            ShapeKind::Line => self.line_fill_color.clone(),
        };
        Shape {
            id: ShapeId::generate(),
            kind,
            start_point: at,
            end_point: at,
            fill_color,
            stroke_color: self.stroke_color.clone(),
            stroke_width: self.stroke_width,
            line_style: self.line_style,
            selected: false,
        }
    }
}
