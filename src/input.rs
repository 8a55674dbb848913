//! Input model: tools, mouse buttons, and the gesture state machine.
//!
//! `Tool` captures what a pointer-down on empty canvas will draw.
//! `InputState` is the gesture tracked between pointer-down and pointer-up.
//! It carries the in-progress shape or the drag offset, and lives outside the
//! shape store and the history: nothing here is persisted or undoable until
//! the engine commits it on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{Shape, ShapeId, ShapeKind};
use crate::geometry::Point;

/// Which drawing tool is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Draw a rectangle (default).
    #[default]
    Rectangle,
    /// Draw a circle.
    Circle,
    /// Draw a straight line.
    Line,
}

impl Tool {
    /// The kind of shape this tool draws.
    #[must_use]
    pub fn shape_kind(self) -> ShapeKind {
        match self {
            Self::Rectangle => ShapeKind::Rectangle,
            Self::Circle => ShapeKind::Circle,
            Self::Line => ShapeKind::Line,
        }
    }

    /// Parse a tool name as sent by the host toolbar.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match ShapeKind::parse(raw)? {
            ShapeKind::Rectangle => Some(Self::Rectangle),
            ShapeKind::Circle => Some(Self::Circle),
            ShapeKind::Line => Some(Self::Line),
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Persistent UI state that isn't part of the drawing.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active drawing tool.
    pub tool: Tool,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving the selected shape.
    DraggingShape {
        /// Id of the shape being dragged.
        id: ShapeId,
        /// Pointer position minus the shape's start point at grab time.
        offset: Point,
        /// Whether any pointer-move actually changed the shape.
        moved: bool,
    },
    /// The user is sizing a new shape by dragging from its start corner.
    DrawingShape {
        /// The provisional shape; not yet in the store.
        shape: Shape,
    },
}

impl InputState {
    /// The provisional shape being drawn, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&Shape> {
        match self {
            Self::DrawingShape { shape } => Some(shape),
            Self::Idle | Self::DraggingShape { .. } => None,
        }
    }

    /// Returns `true` while no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
