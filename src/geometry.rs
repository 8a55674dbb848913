//! Geometry: points, bounding boxes, and point-in-shape hit testing.
//!
//! Every function dispatches exhaustively over [`ShapeKind`]. Degenerate
//! shapes (zero width, zero height, zero length) are valid input: they yield
//! zero-size bounds and, for lines, never match a hit test.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::LINE_HIT_SLACK;
use crate::doc::{Shape, ShapeKind};

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite (not NaN or infinite).
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// This point shifted by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point { x: self.x + dx, y: self.y + dy }
    }

    /// Midpoint between this point and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point { x: (self.x + other.x) / 2.0, y: (self.y + other.y) / 2.0 }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Bounding box of the diagonal between `a` and `b`.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        let right = a.x.max(b.x);
        let bottom = a.y.max(b.y);
        Self { left, top, right, bottom, width: right - left, height: bottom - top }
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Whether `point` lies on or within `shape`, with the default line slack.
#[must_use]
pub fn point_in_shape(point: Point, shape: &Shape) -> bool {
    point_in_shape_with_slack(point, shape, LINE_HIT_SLACK)
}

/// Whether `point` lies on or within `shape`.
///
/// Lines match within `stroke_width + line_slack` of the segment.
#[must_use]
pub fn point_in_shape_with_slack(point: Point, shape: &Shape, line_slack: f64) -> bool {
    match shape.kind {
        ShapeKind::Rectangle => shape_bounds(shape).contains(point),
        ShapeKind::Circle => {
            let center = shape.start_point.midpoint(shape.end_point);
            let radius = circle_radius(shape);
            point.distance(center) <= radius
        }
        ShapeKind::Line => {
            let tolerance = shape.stroke_width + line_slack;
            distance_to_segment(point, shape.start_point, shape.end_point)
                .is_some_and(|d| d <= tolerance)
        }
    }
}

/// Distance from `p` to the segment `a`-`b`, or `None` for a zero-length segment.
#[must_use]
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> Option<f64> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= 0.0 {
        return None;
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let projection = Point { x: a.x + t * dx, y: a.y + t * dy };
    Some(p.distance(projection))
}

/// Radius of a circle shape: half the distance between its corners.
#[must_use]
pub fn circle_radius(shape: &Shape) -> f64 {
    shape.start_point.distance(shape.end_point) / 2.0
}

/// Axis-aligned bounding box of the shape's two corners.
#[must_use]
pub fn shape_bounds(shape: &Shape) -> Bounds {
    Bounds::from_corners(shape.start_point, shape.end_point)
}

/// Midpoint of the shape's two corners: box center, circle center, or line midpoint.
#[must_use]
pub fn shape_center(shape: &Shape) -> Point {
    shape.start_point.midpoint(shape.end_point)
}

/// Positions of the selection handles a renderer draws for `shape`.
///
/// Rectangles and circles get the four bounding-box corners, clockwise from
/// top-left. Lines get their two endpoints.
#[must_use]
pub fn selection_handles(shape: &Shape) -> Vec<Point> {
    match shape.kind {
        ShapeKind::Rectangle | ShapeKind::Circle => {
            let b = shape_bounds(shape);
            vec![
                Point::new(b.left, b.top),
                Point::new(b.right, b.top),
                Point::new(b.right, b.bottom),
                Point::new(b.left, b.bottom),
            ]
        }
        ShapeKind::Line => vec![shape.start_point, shape.end_point],
    }
}
