#![forbid(unsafe_code)]

//! Window (scope) composition.
//!
//! A window stacks its rewrite-sequence rows, the row of child scopes, and
//! its goal column inside a padded frame; the owner-name title, when
//! shown, sits above the content stretched to its width. Every shape
//! inside the frame is parented to it and positioned relative to it.

use tacboard_canvas::{Canvas, FrameShape, LabelKind, ShapeId, keys};
use tacboard_core::{Point, Sides};
use tacboard_model::Window;

use crate::build::BuildContext;
use crate::element::{Element, IdElement, h_stack, v_stack, with_padding, with_width};
use crate::node::text_node;
use crate::sequence::hyp_rows;

/// Owner names the prover generates for unnamed scopes.
const ANONYMOUS: &str = "[anonymous]";

/// Compose one window and everything inside it, recursively.
pub(crate) fn compose_window<C: Canvas>(
    canvas: &mut C,
    ctx: &BuildContext<'_>,
    parent: Option<ShapeId>,
    window: &Window,
    depth: u32,
) -> Element {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("compose_window", id = %window.id, depth).entered();

    let frame_id = canvas.create_shape_id(&keys::window(&window.id));
    let padding = Sides::new(ctx.frame_padding, ctx.frame_padding, ctx.frame_padding, 0.0);
    let content = with_padding(
        padding,
        window_insides(canvas, ctx, Some(frame_id), window, depth),
    );

    let layout = match title_node(canvas, ctx, Some(frame_id), window) {
        Some(title) => {
            let stretched = with_width(content.size().width, title.element);
            v_stack(0.0, vec![stretched, content])
        }
        None => v_stack(0.0, vec![content]),
    };

    let size = layout.size();
    Element::new(size, move |canvas, origin, _width| {
        canvas.draw_frame(FrameShape {
            id: frame_id,
            parent,
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
            depth,
        });
        // Children are relative to the frame, not to its parent.
        layout.draw(canvas, Point::ORIGIN);
    })
}

/// Owner-name title row, unless suppressed by configuration, anonymity,
/// or a goal-less window.
fn title_node<C: Canvas>(
    canvas: &mut C,
    ctx: &BuildContext<'_>,
    parent: Option<ShapeId>,
    window: &Window,
) -> Option<IdElement> {
    if ctx.config.hide_owner_titles {
        return None;
    }
    let owner = &window.goal_nodes.first()?.name;
    if owner == ANONYMOUS {
        return None;
    }
    Some(text_node(
        canvas,
        ctx,
        parent,
        owner.clone(),
        LabelKind::Title,
        &keys::window_title(&window.id),
        &[],
    ))
}

/// Stack the window's row groups: hypothesis forests, child scopes, goal
/// column.
fn window_insides<C: Canvas>(
    canvas: &mut C,
    ctx: &BuildContext<'_>,
    parent: Option<ShapeId>,
    window: &Window,
    depth: u32,
) -> Element {
    let mut rows = hyp_rows(canvas, ctx, parent, window, depth);

    let frames: Vec<Element> = ctx
        .tree
        .children_of(&window.id)
        .map(|child| compose_window(canvas, ctx, parent, child, depth + 1))
        .collect();

    let proof = goal_column(canvas, ctx, parent, window);
    if frames.is_empty() {
        if !proof.is_empty() {
            rows.push(v_stack(0.0, proof));
        }
    } else {
        // The goal column's leading tactic stretches to the child-scope
        // row so the two read as one block.
        let frames_el = h_stack(ctx.in_between_margin, frames);
        let frames_width = frames_el.size().width;
        let mut combined = Vec::with_capacity(proof.len() + 1);
        combined.push(frames_el);
        let mut proof = proof.into_iter();
        if let Some(first) = proof.next() {
            combined.push(with_width(frames_width, first));
        }
        combined.extend(proof);
        rows.push(v_stack(0.0, combined));
    }

    v_stack(ctx.in_between_margin, rows)
}

/// Goal column entries, newest goal first, each preceded by the tactic
/// that advanced or closed it when one exists.
fn goal_column<C: Canvas>(
    canvas: &mut C,
    ctx: &BuildContext<'_>,
    parent: Option<ShapeId>,
    window: &Window,
) -> Vec<Element> {
    let mut column = Vec::new();
    for goal in window.goal_nodes.iter().rev() {
        if let Some(tactic) = ctx.tree.tactic_for_goal(&goal.id) {
            let mut text = tactic.text.clone();
            if tactic.success_goal_id.is_some() {
                text.push_str(" 🎉");
            }
            column.push(
                text_node(canvas, ctx, parent, text, LabelKind::Tactic, &tactic.id, &[]).element,
            );
        }
        let highlight_ids = [goal.id.as_str()];
        column.push(
            text_node(
                canvas,
                ctx,
                parent,
                goal.text.clone(),
                LabelKind::Goal,
                &goal.id,
                &highlight_ids,
            )
            .element,
        );
    }
    column
}
