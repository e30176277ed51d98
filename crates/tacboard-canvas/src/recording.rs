#![forbid(unsafe_code)]

//! Deterministic in-memory backend.
//!
//! Records every emission instead of drawing, with fixed text metrics so
//! the same snapshot lays out identically everywhere. Tests assert against
//! the recorded shape table; headless consumers can walk it to feed a real
//! renderer.

use rustc_hash::FxHashMap;
use unicode_width::UnicodeWidthStr;

use tacboard_core::Size;
use tacboard_model::ProofTree;

use crate::canvas::{ArrowPass, Canvas, FrameShape, LabelKind, LabelShape};
use crate::{ShapeId, keys};

/// World units per text column.
const CELL_WIDTH: f64 = 8.0;
/// World units per text line.
const LINE_HEIGHT: f64 = 20.0;

/// Payload recorded for one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordKind {
    Frame {
        depth: u32,
    },
    Label {
        kind: LabelKind,
        text: String,
        highlighted: bool,
    },
}

/// One recorded shape: where it was drawn and what it was.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRecord {
    pub parent: Option<ShapeId>,
    /// Origin relative to `parent`.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: RecordKind,
}

/// One recorded arrow between two existing shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrow {
    pub from: ShapeId,
    pub to: ShapeId,
}

/// In-memory [`Canvas`] and [`ArrowPass`] implementation.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ids: FxHashMap<String, ShapeId>,
    next_id: u32,
    shapes: FxHashMap<ShapeId, ShapeRecord>,
    draw_order: Vec<ShapeId>,
    arrows: Vec<Arrow>,
    focus_mode: bool,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an already-interned key without allocating a new id.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<ShapeId> {
        self.ids.get(key).copied()
    }

    /// The record drawn under `id`, if any.
    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&ShapeRecord> {
        self.shapes.get(&id)
    }

    /// Shape drawn for `key`, resolving the intern table first.
    #[must_use]
    pub fn shape_by_key(&self, key: &str) -> Option<&ShapeRecord> {
        self.shapes.get(&self.resolve(key)?)
    }

    /// Ids in the order their shapes were first drawn.
    #[must_use]
    pub fn draw_order(&self) -> &[ShapeId] {
        &self.draw_order
    }

    /// Recorded arrows, in emission order.
    #[must_use]
    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_focus_mode(&self) -> bool {
        self.focus_mode
    }

    /// Canvas-absolute origin of a shape, following the parent chain.
    #[must_use]
    pub fn absolute_origin(&self, id: ShapeId) -> Option<(f64, f64)> {
        let rec = self.shapes.get(&id)?;
        let (mut x, mut y) = (rec.x, rec.y);
        let mut parent = rec.parent;
        while let Some(pid) = parent {
            let p = self.shapes.get(&pid)?;
            x += p.x;
            y += p.y;
            parent = p.parent;
        }
        Some((x, y))
    }

    /// Snapshot of the full shape table, ordered by id, for equality
    /// assertions across rebuilds.
    #[must_use]
    pub fn shape_table(&self) -> Vec<(ShapeId, ShapeRecord)> {
        let mut rows: Vec<_> = self
            .shapes
            .iter()
            .map(|(id, rec)| (*id, rec.clone()))
            .collect();
        rows.sort_by_key(|(id, _)| *id);
        rows
    }

    fn record(&mut self, id: ShapeId, rec: ShapeRecord) {
        if self.shapes.insert(id, rec).is_none() {
            self.draw_order.push(id);
        }
    }

    /// Id of `key` only if its shape was actually drawn this build.
    fn drawn(&self, key: &str) -> Option<ShapeId> {
        let id = self.resolve(key)?;
        self.shapes.contains_key(&id).then_some(id)
    }

    fn push_arrow(&mut self, from: Option<ShapeId>, to: Option<ShapeId>) {
        if let (Some(from), Some(to)) = (from, to) {
            self.arrows.push(Arrow { from, to });
        }
    }
}

impl Canvas for RecordingCanvas {
    fn create_shape_id(&mut self, key: &str) -> ShapeId {
        if let Some(id) = self.ids.get(key) {
            return *id;
        }
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.ids.insert(key.to_owned(), id);
        id
    }

    fn measure_text(&self, text: &str) -> Size {
        let mut lines = 0usize;
        let mut max_cols = 0usize;
        for line in text.lines() {
            lines += 1;
            max_cols = max_cols.max(UnicodeWidthStr::width(line));
        }
        Size::new(
            max_cols as f64 * CELL_WIDTH,
            lines.max(1) as f64 * LINE_HEIGHT,
        )
    }

    fn draw_frame(&mut self, frame: FrameShape) {
        self.record(
            frame.id,
            ShapeRecord {
                parent: frame.parent,
                x: frame.x,
                y: frame.y,
                width: frame.width,
                height: frame.height,
                kind: RecordKind::Frame { depth: frame.depth },
            },
        );
    }

    fn draw_label(&mut self, label: LabelShape<'_>) {
        self.record(
            label.id,
            ShapeRecord {
                parent: label.parent,
                x: label.x,
                y: label.y,
                width: label.width,
                height: label.height,
                kind: RecordKind::Label {
                    kind: label.kind,
                    text: label.text.to_owned(),
                    highlighted: label.highlighted,
                },
            },
        );
    }

    fn clear_all(&mut self) {
        // The intern table survives so rebuilt snapshots keep their ids.
        self.shapes.clear();
        self.draw_order.clear();
        self.arrows.clear();
    }

    fn set_focus_mode(&mut self, focused: bool) {
        self.focus_mode = focused;
    }
}

impl ArrowPass for RecordingCanvas {
    fn draw_arrows(&mut self, tree: &ProofTree) {
        for tactic in &tree.tactics {
            for arrow in &tactic.hyp_arrows {
                let label = self.drawn(&keys::forest_tactic(&tactic.id, arrow.from_id.as_deref()));
                let source = arrow.from_id.as_deref().and_then(|id| self.drawn(id));
                self.push_arrow(source, label);
                for to_id in &arrow.to_ids {
                    let target = self.drawn(to_id);
                    self.push_arrow(label, target);
                }
            }
            for arrow in &tactic.goal_arrows {
                let goal = self.drawn(&arrow.from_id);
                let label = self.drawn(&tactic.id);
                self.push_arrow(goal, label);
            }
        }
    }
}
