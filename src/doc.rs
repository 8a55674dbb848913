//! Document model: shapes, their style properties, and the ordered store.
//!
//! This module defines the data that describes what is on the canvas
//! (`Shape`, `ShapeKind`, `LineStyle`), a sparse-update type for property
//! edits (`ShapePatch`), and the runtime store that owns the live collection
//! (`ShapeStore`).
//!
//! Data flows into this layer from file import (JSON deserialization) and from
//! the input engine (mutations). The store's order is paint order: later
//! shapes are drawn on top and win hit-test ties.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{self, Point};

/// Opaque unique identifier for a shape.
///
/// Ids minted by this crate are hyphen-less UUID v4 strings; ids read from a
/// file are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    /// Mint a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Borrow the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShapeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ShapeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of a shape. Each kind reads `start_point`/`end_point` differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned box spanning the two corners.
    Rectangle,
    /// Circle whose diameter is the segment between the two corners.
    Circle,
    /// Straight segment from start to end.
    Line,
}

impl ShapeKind {
    /// Lowercase name as written to file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Line => "line",
        }
    }

    /// Parse a lowercase kind name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "rectangle" => Some(Self::Rectangle),
            "circle" => Some(Self::Circle),
            "line" => Some(Self::Line),
            _ => None,
        }
    }
}

/// Dash pattern of a shape's stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// A drawable shape as stored in the document and in saved files.
///
/// Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Unique identifier; never changes after creation.
    pub id: ShapeId,
    /// Rectangle, circle, or line. Older files call this field `type`.
    #[serde(alias = "type")]
    pub kind: ShapeKind,
    /// First corner (or line start) in canvas coordinates.
    pub start_point: Point,
    /// Opposite corner (or line end) in canvas coordinates.
    pub end_point: Point,
    /// CSS fill color. Ignored for lines.
    pub fill_color: String,
    /// CSS stroke color.
    pub stroke_color: String,
    /// Stroke width in canvas pixels; always positive.
    pub stroke_width: f64,
    /// Stroke dash pattern.
    pub line_style: LineStyle,
    /// Whether this is the single selected shape.
    pub selected: bool,
}

impl Shape {
    /// Move both corners by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.start_point = self.start_point.offset(dx, dy);
        self.end_point = self.end_point.offset(dx, dy);
    }
}

/// Sparse property edit for a shape. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapePatch {
    /// New fill color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    /// New stroke color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    /// New stroke width, if being updated. Must be finite and positive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// New dash pattern, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    /// New first corner, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_point: Option<Point>,
    /// New opposite corner, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_point: Option<Point>,
}

impl ShapePatch {
    /// Returns `true` if applying this patch would keep the shape valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.stroke_width.is_none_or(|w| w.is_finite() && w > 0.0)
    }

    /// Returns `true` if the patch carries no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// In-memory ordered store of shapes.
///
/// All selection changes go through [`ShapeStore::select_only`], which keeps
/// at most one shape flagged as selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a shape on top of the paint order, unselected.
    ///
    /// Returns `false` and stores nothing if a shape with the same id is
    /// already present.
    #[must_use]
    pub fn create(&mut self, mut shape: Shape) -> bool {
        if self.get(&shape.id).is_some() {
            return false;
        }
        shape.selected = false;
        self.shapes.push(shape);
        true
    }

    /// Clear every selection flag, then select the shape with `id` if present.
    ///
    /// Returns the newly selected shape, or `None` when `id` is `None` or
    /// matches nothing.
    pub fn select_only(&mut self, id: Option<&ShapeId>) -> Option<&Shape> {
        for shape in &mut self.shapes {
            shape.selected = false;
        }
        let id = id?;
        let shape = self.shapes.iter_mut().find(|s| &s.id == id)?;
        shape.selected = true;
        Some(shape)
    }

    /// Replace the shape with the same id, keeping its place in paint order.
    /// Returns `false` if no shape has that id.
    ///
    /// The stored `selected` flag wins over the incoming one; selection only
    /// changes through [`ShapeStore::select_only`].
    pub fn update(&mut self, mut shape: Shape) -> bool {
        let Some(slot) = self.shapes.iter_mut().find(|s| s.id == shape.id) else {
            return false;
        };
        shape.selected = slot.selected;
        *slot = shape;
        true
    }

    /// Apply a property patch. Returns `false` if the shape doesn't exist or
    /// the patch is invalid; nothing changes in either case.
    pub fn apply_patch(&mut self, id: &ShapeId, patch: &ShapePatch) -> bool {
        if !patch.is_valid() {
            return false;
        }
        let Some(shape) = self.shapes.iter_mut().find(|s| &s.id == id) else {
            return false;
        };
        if let Some(ref fill) = patch.fill_color {
            shape.fill_color.clone_from(fill);
        }
        if let Some(ref stroke) = patch.stroke_color {
            shape.stroke_color.clone_from(stroke);
        }
        if let Some(w) = patch.stroke_width {
            shape.stroke_width = w;
        }
        if let Some(style) = patch.line_style {
            shape.line_style = style;
        }
        if let Some(p) = patch.start_point {
            shape.start_point = p;
        }
        if let Some(p) = patch.end_point {
            shape.end_point = p;
        }
        true
    }

    /// Move a shape by `(dx, dy)`. Returns `false` if it doesn't exist.
    pub fn translate(&mut self, id: &ShapeId, dx: f64, dy: f64) -> bool {
        let Some(shape) = self.shapes.iter_mut().find(|s| &s.id == id) else {
            return false;
        };
        shape.translate(dx, dy);
        true
    }

    /// Topmost shape under `point`, using `line_slack` for lines.
    #[must_use]
    pub fn hit_test(&self, point: Point, line_slack: f64) -> Option<&Shape> {
        self.shapes
            .iter()
            .rev()
            .find(|s| geometry::point_in_shape_with_slack(point, s, line_slack))
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| &s.id == id)
    }

    /// The selected shape, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.selected)
    }

    /// All shapes in paint order (bottom first).
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Copy of the whole collection, suitable for recording in history.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Shape> {
        self.shapes.clone()
    }

    /// Replace the whole collection (file load, undo, redo).
    pub fn replace_all(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
    }

    /// Number of shapes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
