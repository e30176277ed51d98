#![forbid(unsafe_code)]

//! Build orchestration: clear, focus, compose, draw, arrows.

use tacboard_canvas::{ArrowPass, Canvas};
use tacboard_core::{Point, UiConfig};
use tacboard_model::ProofTree;

use crate::window::compose_window;

/// Gap between sibling rows and boxes, in world units.
pub const IN_BETWEEN_MARGIN: f64 = 20.0;
/// Inner padding of a window frame, in world units.
pub const FRAME_PADDING: f64 = 20.0;

/// Everything the composition pass threads through its recursion.
pub(crate) struct BuildContext<'a> {
    pub tree: &'a ProofTree,
    pub current_goal: &'a str,
    pub config: UiConfig,
    pub in_between_margin: f64,
    pub frame_padding: f64,
}

/// Render a full proof snapshot onto `canvas`.
///
/// Clears previous shapes and enters focus mode first; a snapshot without
/// a root window leaves the canvas empty. The arrow pass runs strictly
/// after the last node is drawn, once every shape id it may resolve
/// exists.
pub fn build_proof_tree<C: Canvas + ArrowPass>(
    canvas: &mut C,
    tree: &ProofTree,
    current_goal: &str,
    config: UiConfig,
) {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "build_proof_tree",
        windows = tree.windows.len(),
        tactics = tree.tactics.len(),
        current_goal,
    )
    .entered();

    canvas.clear_all();
    canvas.set_focus_mode(true);

    let Some(root) = tree.root_window() else {
        #[cfg(feature = "tracing")]
        tracing::debug!("no root window, leaving the canvas empty");
        return;
    };

    let ctx = BuildContext {
        tree,
        current_goal,
        config,
        in_between_margin: IN_BETWEEN_MARGIN,
        frame_padding: FRAME_PADDING,
    };

    let scene = compose_window(canvas, &ctx, None, root, 0);
    scene.draw(canvas, Point::ORIGIN);

    canvas.draw_arrows(tree);
}
