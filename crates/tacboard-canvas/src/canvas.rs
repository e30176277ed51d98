#![forbid(unsafe_code)]

//! The drawing seam between the layout engine and a backend.

use tacboard_core::Size;
use tacboard_model::ProofTree;

use crate::ShapeId;

/// Which of the four label styles a text shape uses.
///
/// Purely presentational; layout treats all labels alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    Tactic,
    Goal,
    Hypothesis,
    /// Window owner-name row.
    Title,
}

/// One frame emission. Coordinates are relative to `parent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameShape {
    pub id: ShapeId,
    pub parent: Option<ShapeId>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Nesting depth, for visual styling only.
    pub depth: u32,
}

/// One label emission. Coordinates are relative to `parent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelShape<'a> {
    pub id: ShapeId,
    pub parent: Option<ShapeId>,
    pub x: f64,
    pub y: f64,
    /// Natural width, or the wider span the caller stretched to.
    pub width: f64,
    pub height: f64,
    pub text: &'a str,
    pub kind: LabelKind,
    pub highlighted: bool,
}

/// What the layout engine needs from a rendering backend.
///
/// Implementations own the shape namespace: [`Canvas::create_shape_id`]
/// must return the same id for the same key across repeated builds, and
/// [`Canvas::clear_all`] must keep interned ids valid.
pub trait Canvas {
    /// Intern `key` into a stable shape id.
    fn create_shape_id(&mut self, key: &str) -> ShapeId;

    /// Measure `text` in world units, before any stretching.
    fn measure_text(&self, text: &str) -> Size;

    /// Emit a window frame.
    fn draw_frame(&mut self, frame: FrameShape);

    /// Emit a text label.
    fn draw_label(&mut self, label: LabelShape<'_>);

    /// Drop every shape. Interned ids stay valid.
    fn clear_all(&mut self);

    /// Toggle the focused presentation mode.
    fn set_focus_mode(&mut self, focused: bool);
}

/// Post-layout arrow drawing.
///
/// Runs strictly after every node shape exists. Implementations resolve
/// ids the layout pass already interned and skip endpoints that were
/// filtered out or never drawn; they must not invent new shape ids.
pub trait ArrowPass {
    fn draw_arrows(&mut self, tree: &ProofTree);
}
