use super::*;
use crate::doc::{LineStyle, ShapeId, ShapeKind};
use crate::geometry::Point;

fn make_shape(id: &str) -> Shape {
    Shape {
        id: ShapeId::from(id),
        kind: ShapeKind::Rectangle,
        start_point: Point::new(0.0, 0.0),
        end_point: Point::new(10.0, 10.0),
        fill_color: "#93C5FD".to_owned(),
        stroke_color: "#1F2937".to_owned(),
        stroke_width: 2.0,
        line_style: LineStyle::Solid,
        selected: false,
    }
}

fn snap(ids: &[&str]) -> Snapshot {
    ids.iter().map(|id| make_shape(id)).collect()
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_history_holds_one_empty_snapshot() {
    let h = History::new();
    assert_eq!(h.len(), 1);
    assert_eq!(h.index(), 0);
    assert!(!h.can_undo());
    assert!(!h.can_redo());
}

#[test]
fn undo_at_start_is_noop() {
    let mut h = History::new();
    assert!(h.undo().is_none());
    assert_eq!(h.index(), 0);
}

#[test]
fn redo_at_end_is_noop() {
    let mut h = History::new();
    h.record(snap(&["a"]));
    assert!(h.redo().is_none());
    assert_eq!(h.index(), 1);
}

// =============================================================
// Record / undo / redo
// =============================================================

#[test]
fn record_advances_cursor() {
    let mut h = History::new();
    h.record(snap(&["a"]));
    h.record(snap(&["a", "b"]));
    assert_eq!(h.len(), 3);
    assert_eq!(h.index(), 2);
    assert!(h.can_undo());
    assert!(!h.can_redo());
}

#[test]
fn undo_then_redo_walks_snapshots() {
    let a = snap(&["a"]);
    let b = snap(&["a", "b"]);
    let mut h = History::new();
    h.record(a.clone());
    h.record(b.clone());

    assert_eq!(h.undo(), Some(&a));
    assert!(h.can_redo());
    assert_eq!(h.redo(), Some(&b));
    assert!(!h.can_redo());
}

#[test]
fn undo_to_initial_empty_snapshot() {
    let mut h = History::new();
    h.record(snap(&["a"]));
    assert_eq!(h.undo().map(Vec::len), Some(0));
    assert!(!h.can_undo());
}

#[test]
fn record_after_undo_discards_redo_tail() {
    let a = snap(&["a"]);
    let c = snap(&["c"]);
    let mut h = History::new();
    h.record(a.clone());
    h.record(snap(&["a", "b"]));
    h.undo();
    h.record(c.clone());

    assert_eq!(h.len(), 3);
    assert!(h.redo().is_none());
    assert_eq!(h.undo(), Some(&a));
    assert_eq!(h.redo(), Some(&c));
}

#[test]
fn undo_redo_do_not_mutate_snapshots() {
    let mut h = History::new();
    h.record(snap(&["a"]));
    h.record(snap(&["a", "b"]));
    let before = h.clone();
    h.undo();
    h.undo();
    h.redo();
    h.redo();
    assert_eq!(h, before);
}
