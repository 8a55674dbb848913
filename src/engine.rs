use serde::Serialize;
use tracing::{debug, warn};

use crate::codec::{self, ImportError};
use crate::config::EditorConfig;
use crate::doc::{Shape, ShapeId, ShapePatch, ShapeStore};
use crate::geometry::Point;
use crate::history::History;
use crate::input::{Button, InputState, Tool, UiState};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers and commands for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// A new shape was committed to the drawing.
    ShapeCreated { shape: Shape },
    /// An existing shape was committed with new geometry or style.
    ShapeUpdated { shape: Shape },
    /// The selected shape changed (`None` = nothing selected).
    SelectionChanged { id: Option<ShapeId> },
    /// Undo/redo availability after a history change.
    #[serde(rename_all = "camelCase")]
    HistoryChanged { can_undo: bool, can_redo: bool },
    /// The scene needs repainting.
    RenderNeeded,
}

/// Core editor state: shape store, history, tool, and the active gesture.
///
/// Everything here is plain Rust so it can be tested without a browser. The
/// `wasm` module wraps it for the host page.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub store: ShapeStore,
    pub history: History,
    pub ui: UiState,
    pub input: InputState,
    pub config: EditorConfig,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Tool ---

    /// Set the active drawing tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    // --- Pointer input ---

    /// Pointer pressed at `pt`.
    ///
    /// Pressing the selected shape starts a drag; pressing another shape
    /// selects it; pressing empty canvas clears the selection and starts
    /// drawing with the active tool. Non-primary buttons and non-finite
    /// positions are ignored.
    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || !finite_or_warn(pt) {
            return Vec::new();
        }

        // A press without a release for the previous gesture ends it here.
        let mut actions = self.finish_gesture();

        let hit = self
            .store
            .hit_test(pt, self.config.line_hit_slack)
            .map(|s| (s.id.clone(), s.selected, s.start_point));

        match hit {
            Some((id, true, start)) => {
                let offset = Point::new(pt.x - start.x, pt.y - start.y);
                self.input = InputState::DraggingShape { id, offset, moved: false };
            }
            Some((id, false, _)) => {
                self.store.select_only(Some(&id));
                actions.push(Action::SelectionChanged { id: Some(id) });
                actions.push(Action::RenderNeeded);
            }
            None => {
                if self.store.selected().is_some() {
                    self.store.select_only(None);
                    actions.push(Action::SelectionChanged { id: None });
                }
                let shape = self.config.new_shape(self.ui.tool.shape_kind(), pt);
                self.input = InputState::DrawingShape { shape };
                actions.push(Action::RenderNeeded);
            }
        }
        actions
    }

    /// Pointer moved to `pt`. Updates the drag or the draw preview; never
    /// touches history.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        if !finite_or_warn(pt) {
            return Vec::new();
        }
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::DraggingShape { id, offset, moved } => {
                let Some(shape) = self.store.get(id) else {
                    return Vec::new();
                };
                let dx = pt.x - offset.x - shape.start_point.x;
                let dy = pt.y - offset.y - shape.start_point.y;
                if dx == 0.0 && dy == 0.0 {
                    return Vec::new();
                }
                self.store.translate(id, dx, dy);
                *moved = true;
                vec![Action::RenderNeeded]
            }
            InputState::DrawingShape { shape } => {
                if shape.end_point == pt {
                    return Vec::new();
                }
                shape.end_point = pt;
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Pointer released at `pt`. Commits the gesture to the store and history.
    ///
    /// Any button ends the gesture; only the primary one moves it to `pt`
    /// first.
    pub fn on_pointer_up(&mut self, pt: Point, button: Button) -> Vec<Action> {
        let mut actions = if button == Button::Primary { self.on_pointer_move(pt) } else { Vec::new() };
        actions.extend(self.finish_gesture());
        actions
    }

    /// End the active gesture, committing whatever it produced.
    fn finish_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle | InputState::DraggingShape { moved: false, .. } => Vec::new(),
            InputState::DraggingShape { id, moved: true, .. } => {
                let Some(shape) = self.store.get(&id).cloned() else {
                    return Vec::new();
                };
                self.history.record(self.store.snapshot());
                debug!(%id, "committed shape move");
                vec![Action::ShapeUpdated { shape }, self.history_changed()]
            }
            InputState::DrawingShape { shape } => {
                let min = self.config.min_draw_extent;
                let width = (shape.end_point.x - shape.start_point.x).abs();
                let height = (shape.end_point.y - shape.start_point.y).abs();
                if width < min && height < min {
                    debug!(width, height, min, "discarding undersized shape");
                    return vec![Action::RenderNeeded];
                }
                if !self.store.create(shape.clone()) {
                    warn!(id = %shape.id, "discarding drawn shape with duplicate id");
                    return vec![Action::RenderNeeded];
                }
                self.history.record(self.store.snapshot());
                debug!(id = %shape.id, kind = shape.kind.as_str(), "committed new shape");
                vec![Action::ShapeCreated { shape }, self.history_changed(), Action::RenderNeeded]
            }
        }
    }

    // --- Selection and edits ---

    /// Select the shape with `id`, or clear the selection with `None`.
    pub fn select(&mut self, id: Option<&ShapeId>) -> Vec<Action> {
        let selected = self.store.select_only(id).map(|s| s.id.clone());
        vec![Action::SelectionChanged { id: selected }, Action::RenderNeeded]
    }

    /// Apply a property edit to the selected shape and record it.
    pub fn update_selected(&mut self, patch: &ShapePatch) -> Vec<Action> {
        let Some(id) = self.store.selected().map(|s| s.id.clone()) else {
            return Vec::new();
        };
        if patch.is_empty() {
            return Vec::new();
        }
        if !self.store.apply_patch(&id, patch) {
            warn!(%id, ?patch, "rejected shape property edit");
            return Vec::new();
        }
        self.commit_update(&id)
    }

    /// Replace a shape wholesale (matched by id) and record it.
    pub fn update_shape(&mut self, shape: Shape) -> Vec<Action> {
        if !(shape.stroke_width.is_finite() && shape.stroke_width > 0.0) {
            warn!(id = %shape.id, width = shape.stroke_width, "rejected shape with invalid stroke width");
            return Vec::new();
        }
        let id = shape.id.clone();
        if !self.store.update(shape) {
            return Vec::new();
        }
        self.commit_update(&id)
    }

    fn commit_update(&mut self, id: &ShapeId) -> Vec<Action> {
        let Some(shape) = self.store.get(id).cloned() else {
            return Vec::new();
        };
        self.history.record(self.store.snapshot());
        debug!(%id, "committed shape update");
        vec![Action::ShapeUpdated { shape }, self.history_changed(), Action::RenderNeeded]
    }

    // --- History ---

    /// Restore the previous snapshot. No-op at the start of history.
    pub fn undo(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        let Some(snapshot) = self.history.undo() else {
            return Vec::new();
        };
        self.store.replace_all(snapshot.clone());
        debug!(index = self.history.index(), len = self.history.len(), "undo");
        self.after_restore()
    }

    /// Re-apply the next snapshot. No-op at the end of history.
    pub fn redo(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        let Some(snapshot) = self.history.redo() else {
            return Vec::new();
        };
        self.store.replace_all(snapshot.clone());
        debug!(index = self.history.index(), len = self.history.len(), "redo");
        self.after_restore()
    }

    fn after_restore(&self) -> Vec<Action> {
        vec![
            Action::SelectionChanged { id: self.store.selected().map(|s| s.id.clone()) },
            self.history_changed(),
            Action::RenderNeeded,
        ]
    }

    fn history_changed(&self) -> Action {
        Action::HistoryChanged { can_undo: self.history.can_undo(), can_redo: self.history.can_redo() }
    }

    // --- Persistence ---

    /// Serialize the drawing for saving.
    #[must_use]
    pub fn save(&self) -> String {
        codec::export(self.store.shapes())
    }

    /// Load a drawing from file text. Malformed text loads an empty drawing.
    pub fn load(&mut self, text: &str) -> Vec<Action> {
        self.commit_load(codec::import(text))
    }

    /// Load a drawing from file text, leaving state untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns the [`ImportError`] describing why the text was rejected.
    pub fn load_strict(&mut self, text: &str) -> Result<Vec<Action>, ImportError> {
        let shapes = codec::try_import(text)?;
        Ok(self.commit_load(shapes))
    }

    fn commit_load(&mut self, shapes: Vec<Shape>) -> Vec<Action> {
        self.input = InputState::Idle;
        let count = shapes.len();
        self.store.replace_all(shapes);
        self.history.record(self.store.snapshot());
        debug!(count, "loaded drawing");
        self.after_restore()
    }

    // --- Queries ---

    /// All committed shapes in paint order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        self.store.shapes()
    }

    /// The currently selected shape, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Shape> {
        self.store.selected()
    }

    /// The shape being drawn but not yet committed, for the renderer.
    #[must_use]
    pub fn preview(&self) -> Option<&Shape> {
        self.input.preview()
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

fn finite_or_warn(pt: Point) -> bool {
    if pt.is_finite() {
        return true;
    }
    warn!(x = pt.x, y = pt.y, "ignoring non-finite pointer position");
    false
}
