#![forbid(unsafe_code)]

//! Rendering-backend interfaces.
//!
//! The layout engine never draws primitives itself; it emits frames and
//! labels through the [`Canvas`] trait and leaves connective arrows to a
//! separate [`ArrowPass`] collaborator that runs once everything else is
//! on screen. [`RecordingCanvas`] is the deterministic in-memory
//! implementation used by tests and headless consumers.

mod canvas;
pub mod keys;
mod recording;

pub use canvas::{ArrowPass, Canvas, FrameShape, LabelKind, LabelShape};
pub use recording::{Arrow, RecordKind, RecordingCanvas, ShapeRecord};

/// Stable identity of one drawn shape.
///
/// Allocated by interning an external string key; the same key maps to the
/// same id for the lifetime of a backend instance, including across
/// [`Canvas::clear_all`], so repeated builds of one snapshot overwrite
/// their shapes instead of accumulating new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u32);
