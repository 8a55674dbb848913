//! Drawing core for the browser vector editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and as a
//! plain rlib for tests. It owns the editor's model: the ordered shape
//! collection with its single selection, hit-testing and bounds math, the
//! undo/redo history, and the drawing file format. The host page wires DOM
//! events to [`wasm::Editor`], paints what it reports, and handles file
//! pickers.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`] turning pointer events and commands into [`engine::Action`]s |
//! | [`doc`] | Shape types and the ordered [`doc::ShapeStore`] |
//! | [`geometry`] | Points, bounds, and point-in-shape hit testing |
//! | [`history`] | Linear undo/redo stack of snapshots |
//! | [`codec`] | JSON export/import of drawings |
//! | [`config`] | Default style for new shapes and interaction tuning |
//! | [`input`] | Tools, buttons, and the gesture state machine |
//! | [`wasm`] | `wasm-bindgen` facade for the host page |
//! | [`consts`] | Shared constants (hit slack, default colors) |

pub mod codec;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod history;
pub mod input;
pub mod wasm;
