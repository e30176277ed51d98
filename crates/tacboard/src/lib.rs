#![forbid(unsafe_code)]

//! Tacboard public facade crate.
//!
//! This crate provides the stable surface area for hosts embedding the
//! proof-diagram engine. It re-exports the common types from the internal
//! crates, offers a lightweight prelude, and adds [`build_from_json`] for
//! hosts that receive proof snapshots as JSON over an RPC channel.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use tacboard_core::{Point, Sides, Size, UiConfig};

// --- Model re-exports ------------------------------------------------------

pub use tacboard_model::{
    GoalArrow, GoalNode, HypArrow, HypLayer, HypNode, ProofTree, Tactic, Window,
};

// --- Canvas re-exports -----------------------------------------------------

pub use tacboard_canvas::{
    Arrow, ArrowPass, Canvas, FrameShape, LabelKind, LabelShape, RecordKind, RecordingCanvas,
    ShapeId, ShapeRecord,
};

// --- Layout re-exports -----------------------------------------------------

pub use tacboard_layout::{FRAME_PADDING, IN_BETWEEN_MARGIN, build_proof_tree};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tacboard hosts.
#[derive(Debug)]
pub enum Error {
    /// The proof snapshot JSON did not parse.
    Snapshot(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snapshot(err) => write!(f, "invalid proof snapshot: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Snapshot(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Snapshot(err)
    }
}

/// Standard result type for tacboard APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- JSON entry point ------------------------------------------------------

/// Parse a proof snapshot from its JSON wire form and render it.
///
/// Nothing is drawn when parsing fails; the canvas keeps whatever it
/// showed before.
pub fn build_from_json<C: Canvas + ArrowPass>(
    canvas: &mut C,
    json: &str,
    current_goal: &str,
    config: UiConfig,
) -> Result<()> {
    let tree = ProofTree::from_json(json)?;
    build_proof_tree(canvas, &tree, current_goal, config);
    Ok(())
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ArrowPass, Canvas, Error, LabelKind, ProofTree, RecordingCanvas, Result, ShapeId,
        UiConfig, build_from_json, build_proof_tree,
    };

    pub use crate::{canvas, core, layout, model};
}

pub use tacboard_canvas as canvas;
pub use tacboard_core as core;
pub use tacboard_layout as layout;
pub use tacboard_model as model;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_from_json_renders_a_parsed_snapshot() {
        let mut canvas = RecordingCanvas::new();
        let json = r#"{
            "windows": [
                {"id": "w", "goalNodes": [{"id": "g1", "text": "⊢ True", "name": "[anonymous]"}]}
            ],
            "tactics": []
        }"#;
        build_from_json(&mut canvas, json, "g1", UiConfig::default()).unwrap();
        assert!(canvas.shape_by_key("g1").is_some());
        assert!(canvas.is_focus_mode());
    }

    #[test]
    fn malformed_json_surfaces_as_a_snapshot_error() {
        let mut canvas = RecordingCanvas::new();
        let err = build_from_json(&mut canvas, "{not json", "g", UiConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Snapshot(_)));
        assert!(err.to_string().starts_with("invalid proof snapshot"));
        assert!(std::error::Error::source(&err).is_some());
        // The parse failed before any drawing started.
        assert_eq!(canvas.shape_count(), 0);
    }
}
