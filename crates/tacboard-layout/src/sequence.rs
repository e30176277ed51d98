#![forbid(unsafe_code)]

//! Rewrite-sequence grouping.
//!
//! A window's hypothesis layers arrive oldest first. Chains of tactics
//! that keep transforming the same hypothesis (`rw` after `rw`) should
//! render as one nested column, not as disconnected rows; this module
//! decides those chains and builds the forest for each.
//!
//! Forest construction walks each chain deepest layer first, so by the
//! time a layer's nodes are materialized, any derivation they produced is
//! already built and can be adopted as a child tree.

use rustc_hash::FxHashMap;

use tacboard_canvas::{Canvas, LabelKind, ShapeId, keys};
use tacboard_model::{HypLayer, HypNode, Tactic, Window};

use crate::build::BuildContext;
use crate::element::{Element, h_stack, v_stack};
use crate::forest::{HypTree, HypTreeNode, forest};
use crate::node::{hyp_node, should_hide, text_node};
use crate::window::compose_window;

/// Partition `layers` into rewrite sequences.
///
/// A layer joins the open group when some hypothesis of the group's last
/// layer is recorded as the source of an arrow targeting the layer;
/// otherwise it starts a new group. Pure, so the merge rule is testable
/// without a canvas.
#[must_use]
pub fn rewrite_sequences<'a>(layers: &'a [HypLayer], tactics: &[Tactic]) -> Vec<Vec<&'a HypLayer>> {
    let mut groups: Vec<Vec<&HypLayer>> = Vec::new();
    for layer in layers {
        match groups.last_mut() {
            Some(group)
                if group
                    .last()
                    .is_some_and(|last| joins_group(last, layer, tactics)) =>
            {
                group.push(layer);
            }
            _ => groups.push(vec![layer]),
        }
    }
    groups
}

/// True when `layer` continues a group ending in `last`: some arrow into
/// `layer` starts from a hypothesis sitting in `last`.
fn joins_group(last: &HypLayer, layer: &HypLayer, tactics: &[Tactic]) -> bool {
    tactics
        .iter()
        .flat_map(|t| &t.hyp_arrows)
        .filter(|arrow| layer.iter().any(|n| arrow.to_ids.contains(&n.id)))
        .filter_map(|arrow| arrow.from_id.as_deref())
        .any(|source| last.iter().any(|n| n.id == source))
}

/// One forest row per rewrite sequence of `window`, in layer order.
///
/// Sequences whose trees are all adopted or filtered away contribute no
/// row.
pub(crate) fn hyp_rows<C: Canvas>(
    canvas: &mut C,
    ctx: &BuildContext<'_>,
    parent: Option<ShapeId>,
    window: &Window,
    depth: u32,
) -> Vec<Element> {
    let mut rows = Vec::new();
    for sequence in rewrite_sequences(&window.hyp_nodes, &ctx.tree.tactics) {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("sequence_forest", window = %window.id, layers = sequence.len())
                .entered();

        let roots = sequence_forest(canvas, ctx, parent, &sequence, depth);
        if !roots.is_empty() {
            rows.push(forest(ctx.in_between_margin, roots));
        }
    }
    rows
}

/// Build one rewrite sequence's trees, deepest layer first.
fn sequence_forest<C: Canvas>(
    canvas: &mut C,
    ctx: &BuildContext<'_>,
    parent: Option<ShapeId>,
    sequence: &[&HypLayer],
    depth: u32,
) -> Vec<HypTree> {
    let mut builder = ForestBuilder::default();
    for level in (0..sequence.len()).rev() {
        let layer = sequence[level];
        let producers: Vec<&Tactic> = ctx
            .tree
            .tactics
            .iter()
            .filter(|t| {
                t.hyp_arrows
                    .iter()
                    .any(|a| layer.iter().any(|n| a.to_ids.contains(&n.id)))
            })
            .collect();

        if producers.is_empty() {
            // Hypotheses present from the start, produced by no visible
            // tactic: one label-less tree for the whole layer.
            let survivors = layer.iter().filter(|n| !should_hide(n, ctx.config));
            let nodes = tree_nodes(canvas, ctx, parent, survivors, &mut builder);
            if !nodes.is_empty() {
                builder.push_root(
                    HypTree {
                        tactic: Element::empty(),
                        level,
                        nodes,
                    },
                    None,
                );
            }
            continue;
        }

        for tactic in producers {
            for arrow in &tactic.hyp_arrows {
                let targets = layer
                    .iter()
                    .filter(|n| arrow.to_ids.contains(&n.id))
                    .filter(|n| !should_hide(n, ctx.config));
                let nodes = tree_nodes(canvas, ctx, parent, targets, &mut builder);
                if nodes.is_empty() {
                    continue;
                }
                let label =
                    forest_tactic_label(canvas, ctx, parent, tactic, arrow.from_id.as_deref(), depth);
                builder.push_root(
                    HypTree {
                        tactic: label,
                        level,
                        nodes,
                    },
                    arrow.from_id.as_deref(),
                );
            }
        }
    }
    builder.finish()
}

/// Materialize tree slots for the given layer nodes, adopting any subtree
/// a deeper level registered under a node's id.
fn tree_nodes<'a, C: Canvas>(
    canvas: &mut C,
    ctx: &BuildContext<'_>,
    parent: Option<ShapeId>,
    nodes: impl Iterator<Item = &'a HypNode>,
    builder: &mut ForestBuilder,
) -> Vec<HypTreeNode> {
    nodes
        .map(|node| {
            let element = hyp_node(canvas, ctx, parent, node);
            let child = builder.adopt(&node.id);
            HypTreeNode {
                id: node.id.clone(),
                element,
                child,
            }
        })
        .collect()
}

/// Tactic label for one arrow: the spawned scope (if any) stacked above
/// the tactic text with no gap.
fn forest_tactic_label<C: Canvas>(
    canvas: &mut C,
    ctx: &BuildContext<'_>,
    parent: Option<ShapeId>,
    tactic: &Tactic,
    from_id: Option<&str>,
    depth: u32,
) -> Element {
    let key = keys::forest_tactic(&tactic.id, from_id);
    let label = text_node(
        canvas,
        ctx,
        parent,
        tactic.text.clone(),
        LabelKind::Tactic,
        &key,
        &[],
    )
    .element;
    let have_windows: Vec<Element> = ctx
        .tree
        .have_window(tactic)
        .map(|w| compose_window(canvas, ctx, parent, w, depth + 1))
        .into_iter()
        .collect();
    v_stack(
        0.0,
        vec![h_stack(ctx.in_between_margin, have_windows), label],
    )
}

/// Forest accumulator for one rewrite sequence.
///
/// Trees are built deepest level first, so a tree discovered to hang off
/// a shallower node must stop being a root. Slots keep insertion order;
/// adopting a child takes the tree out of its slot, which both evicts it
/// from the root set and guarantees a tree gets at most one parent.
#[derive(Default)]
struct ForestBuilder {
    slots: Vec<Option<HypTree>>,
    by_source: FxHashMap<String, usize>,
}

impl ForestBuilder {
    /// Claim the tree registered under `node_id`, if it is still
    /// unparented.
    fn adopt(&mut self, node_id: &str) -> Option<HypTree> {
        let slot = *self.by_source.get(node_id)?;
        self.slots[slot].take()
    }

    /// Add a root tree; `source` is the consumed hypothesis a shallower
    /// layer can adopt it through.
    fn push_root(&mut self, tree: HypTree, source: Option<&str>) {
        let slot = self.slots.len();
        self.slots.push(Some(tree));
        if let Some(source) = source {
            self.by_source.insert(source.to_owned(), slot);
        }
    }

    /// Remaining roots, reversed back into left-to-right discovery order.
    fn finish(self) -> Vec<HypTree> {
        self.slots.into_iter().rev().flatten().collect()
    }
}
