//! Drawing file codec: JSON export and import of a shape collection.
//!
//! The file is a pretty-printed JSON array of shape records, one object per
//! shape in paint order. There is no version tag. Unknown keys are ignored on
//! import; a missing key makes the whole document malformed.
//!
//! Two import flavours exist. [`try_import`] reports why a document was
//! rejected. [`import`] never fails: a rejected document becomes an empty
//! collection, so callers can never observe a half-loaded drawing.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use std::collections::HashSet;

use tracing::warn;

use crate::doc::{Shape, ShapeId};

/// Why a drawing file was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The text is not a JSON array of well-formed shape records.
    #[error("malformed drawing document: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A shape has an empty id.
    #[error("shape at index {index} has an empty id")]
    EmptyId { index: usize },
    /// Two shapes share an id.
    #[error("duplicate shape id: {0}")]
    DuplicateId(ShapeId),
    /// A shape's stroke width is zero, negative, or not finite.
    #[error("shape {id} has invalid stroke width {width}")]
    InvalidStrokeWidth { id: ShapeId, width: f64 },
    /// More than one shape is flagged as selected.
    #[error("{count} shapes are selected; at most one is allowed")]
    MultipleSelected { count: usize },
}

/// Serialize `shapes` as a pretty-printed JSON array.
///
/// Output is deterministic: field order follows [`Shape`]'s declaration.
#[must_use]
pub fn export(shapes: &[Shape]) -> String {
    match serde_json::to_string_pretty(shapes) {
        Ok(text) => text,
        Err(e) => {
            // Only reachable with non-string map keys, which `Shape` has none of.
            warn!(error = %e, "drawing export failed; writing empty document");
            String::from("[]")
        }
    }
}

/// Parse a drawing document, returning an empty collection on any failure.
#[must_use]
pub fn import(text: &str) -> Vec<Shape> {
    match try_import(text) {
        Ok(shapes) => shapes,
        Err(e) => {
            warn!(error = %e, "rejected drawing document; loading empty drawing");
            Vec::new()
        }
    }
}

/// Parse and validate a drawing document.
///
/// # Errors
///
/// Returns [`ImportError`] if the text isn't a JSON array of shapes, or if the
/// shapes break a collection invariant (unique non-empty ids, positive stroke
/// widths, at most one selected).
pub fn try_import(text: &str) -> Result<Vec<Shape>, ImportError> {
    let shapes: Vec<Shape> = serde_json::from_str(text)?;
    validate(&shapes)?;
    Ok(shapes)
}

fn validate(shapes: &[Shape]) -> Result<(), ImportError> {
    let mut seen = HashSet::with_capacity(shapes.len());
    for (index, shape) in shapes.iter().enumerate() {
        if shape.id.as_str().is_empty() {
            return Err(ImportError::EmptyId { index });
        }
        if !seen.insert(&shape.id) {
            return Err(ImportError::DuplicateId(shape.id.clone()));
        }
        if !(shape.stroke_width.is_finite() && shape.stroke_width > 0.0) {
            return Err(ImportError::InvalidStrokeWidth { id: shape.id.clone(), width: shape.stroke_width });
        }
    }

    let count = shapes.iter().filter(|s| s.selected).count();
    if count > 1 {
        return Err(ImportError::MultipleSelected { count });
    }
    Ok(())
}
