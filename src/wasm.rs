//! Browser bindings: a `wasm-bindgen` facade over [`EngineCore`].
//!
//! The host page forwards canvas-local pointer coordinates and toolbar
//! commands here and receives the resulting [`Action`]s as a JSON array
//! string. Shapes cross the boundary as JSON in the same layout as saved
//! files. Painting and DOM wiring stay on the host side.

#[cfg(test)]
#[path = "wasm_test.rs"]
mod wasm_test;

use serde::Serialize;
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::config::EditorConfig;
use crate::doc::{Shape, ShapeId, ShapePatch};
use crate::engine::{Action, EngineCore};
use crate::geometry::Point;
use crate::input::{Button, Tool};

/// Drawing editor handle owned by the host page.
#[wasm_bindgen]
pub struct Editor {
    core: EngineCore,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Editor {
    /// Editor with default configuration.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self { core: EngineCore::new() }
    }

    /// Editor configured from a JSON object (see [`EditorConfig`]).
    ///
    /// # Errors
    ///
    /// Throws a JS `Error` if the config is malformed or out of range.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<Editor, JsValue> {
        let config = EditorConfig::from_json(config_json).map_err(js_error)?;
        Ok(Self { core: EngineCore::with_config(config) })
    }

    // --- Input events ---

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16) -> String {
        actions_json(&self.core.on_pointer_down(Point::new(x, y), Button::from_dom(button)))
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> String {
        actions_json(&self.core.on_pointer_move(Point::new(x, y)))
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f64, y: f64, button: i16) -> String {
        actions_json(&self.core.on_pointer_up(Point::new(x, y), Button::from_dom(button)))
    }

    // --- Commands ---

    /// Switch tool by name: `rectangle`, `circle`, or `line`.
    ///
    /// # Errors
    ///
    /// Throws a JS `Error` for an unknown tool name.
    #[wasm_bindgen(js_name = setTool)]
    pub fn set_tool(&mut self, name: &str) -> Result<(), JsValue> {
        let Some(tool) = Tool::parse(name) else {
            return Err(js_error(format!("unknown tool: {name}")));
        };
        self.core.set_tool(tool);
        Ok(())
    }

    /// Select a shape by id, or clear the selection with `undefined`.
    pub fn select(&mut self, id: Option<String>) -> String {
        let id = id.map(ShapeId::from);
        actions_json(&self.core.select(id.as_ref()))
    }

    /// Apply a JSON property patch to the selected shape.
    ///
    /// # Errors
    ///
    /// Throws a JS `Error` if the patch is not valid JSON for [`ShapePatch`].
    #[wasm_bindgen(js_name = updateSelected)]
    pub fn update_selected(&mut self, patch_json: &str) -> Result<String, JsValue> {
        let patch: ShapePatch = serde_json::from_str(patch_json).map_err(js_error)?;
        Ok(actions_json(&self.core.update_selected(&patch)))
    }

    /// Replace a shape, matched by id, with a full shape object in file
    /// layout. Unknown ids and invalid stroke widths change nothing.
    ///
    /// # Errors
    ///
    /// Throws a JS `Error` if the text is not a valid shape object.
    #[wasm_bindgen(js_name = updateShape)]
    pub fn update_shape(&mut self, shape_json: &str) -> Result<String, JsValue> {
        let shape: Shape = serde_json::from_str(shape_json).map_err(js_error)?;
        Ok(actions_json(&self.core.update_shape(shape)))
    }

    pub fn undo(&mut self) -> String {
        actions_json(&self.core.undo())
    }

    pub fn redo(&mut self) -> String {
        actions_json(&self.core.redo())
    }

    /// Drawing file text for the host to download.
    #[must_use]
    pub fn save(&self) -> String {
        self.core.save()
    }

    /// Load file text; malformed text loads an empty drawing.
    pub fn load(&mut self, text: &str) -> String {
        actions_json(&self.core.load(text))
    }

    /// Load file text, throwing instead of clearing the drawing on failure.
    ///
    /// # Errors
    ///
    /// Throws a JS `Error` carrying the import failure reason.
    #[wasm_bindgen(js_name = loadStrict)]
    pub fn load_strict(&mut self, text: &str) -> Result<String, JsValue> {
        let actions = self.core.load_strict(text).map_err(js_error)?;
        Ok(actions_json(&actions))
    }

    // --- Queries ---

    /// Committed shapes in paint order, as a JSON array.
    #[must_use]
    pub fn shapes(&self) -> String {
        to_json(&self.core.shapes())
    }

    /// The in-progress shape as JSON, or `null`.
    #[must_use]
    pub fn preview(&self) -> String {
        to_json(&self.core.preview())
    }

    /// Id of the selected shape, if any.
    #[wasm_bindgen(js_name = selectedId)]
    #[must_use]
    pub fn selected_id(&self) -> Option<String> {
        self.core.selection().map(|s| s.id.to_string())
    }

    #[wasm_bindgen(js_name = canUndo)]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.core.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.core.can_redo()
    }
}

fn actions_json(actions: &[Action]) -> String {
    match serde_json::to_string(actions) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "failed to encode actions");
            String::from("[]")
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "failed to encode value");
            String::from("null")
        }
    }
}

fn js_error(err: impl ToString) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
