#![forbid(unsafe_code)]

//! Leveled forest layout for hypothesis-derivation trees.
//!
//! A forest renders chains where a tactic consumes hypotheses at one level
//! and produces new ones a level deeper. Row heights are synchronized per
//! level across the whole forest, so sibling trees of different shapes
//! still line up row by row; each tree's tactic label is drawn last,
//! stretched to span the nodes it produced, because that span is only
//! known once the nodes have been placed.

use tacboard_canvas::Canvas;
use tacboard_core::{Point, Size};

use crate::element::{Element, IdElement};

/// One derivation tree in a rewrite-sequence forest.
#[derive(Debug)]
pub struct HypTree {
    /// Label spanning the tree's nodes; may stack a spawned scope above
    /// the tactic text. [`Element::empty`] for layers nobody produced.
    pub tactic: Element,
    /// Depth of this tree's nodes within the owning rewrite sequence.
    pub level: usize,
    pub nodes: Vec<HypTreeNode>,
}

/// One hypothesis slot of a tree.
#[derive(Debug)]
pub struct HypTreeNode {
    /// External hypothesis id (also the shape key of `element`).
    pub id: String,
    pub element: IdElement,
    /// Derivation hanging off this hypothesis, one level deeper.
    pub child: Option<HypTree>,
}

/// Total width of one tree.
///
/// Each node claims the wider of itself and its subtree, with `margin`
/// between adjacent nodes. The tactic label does not contribute: it
/// stretches to the nodes, not the other way around.
#[must_use]
pub fn tree_width(margin: f64, tree: &HypTree) -> f64 {
    let mut width = 0.0;
    for (i, node) in tree.nodes.iter().enumerate() {
        if i > 0 {
            width += margin;
        }
        let mut w = node.element.element.size().width;
        if let Some(child) = &node.child {
            w = w.max(tree_width(margin, child));
        }
        width += w;
    }
    width
}

/// Row height per level across the whole forest.
///
/// A level's height is the tallest (tactic label + tallest node) of every
/// tree resident at that level; levels nobody occupies get 0 so deeper
/// trees still index rows by their own level.
#[must_use]
pub fn level_heights(forest: &[HypTree]) -> Vec<f64> {
    fn visit(tree: &HypTree, heights: &mut Vec<f64>) {
        if heights.len() <= tree.level {
            heights.resize(tree.level + 1, 0.0);
        }
        let tallest_node = tree
            .nodes
            .iter()
            .map(|n| n.element.element.size().height)
            .fold(0.0, f64::max);
        let row = tree.tactic.size().height + tallest_node;
        heights[tree.level] = heights[tree.level].max(row);
        for node in &tree.nodes {
            if let Some(child) = &node.child {
                visit(child, heights);
            }
        }
    }

    let mut heights = Vec::new();
    for tree in forest {
        visit(tree, &mut heights);
    }
    heights
}

/// Package a forest of trees as a single element.
///
/// Roots are placed left to right, `margin` apart; an empty forest
/// collapses to [`Element::empty`].
#[must_use]
pub fn forest(margin: f64, trees: Vec<HypTree>) -> Element {
    if trees.is_empty() {
        return Element::empty();
    }
    let heights = level_heights(&trees);
    let widths: Vec<f64> = trees.iter().map(|t| tree_width(margin, t)).collect();
    let total_width = widths.iter().sum::<f64>() + margin * (widths.len() - 1) as f64;
    let total_height = heights.iter().sum();
    Element::new(
        Size::new(total_width, total_height),
        move |canvas, origin, _width| {
            let mut x = origin.x;
            for (tree, width) in trees.into_iter().zip(widths) {
                draw_tree(canvas, tree, margin, &heights, x, origin.y, 0);
                x += width + margin;
            }
        },
    )
}

/// Place one tree.
///
/// Descends through rows until the tree's own level (keeping x, advancing
/// y by each row's synchronized height), then draws nodes left to right
/// with their subtrees below, and finally the tactic label stretched from
/// the tree's left edge to the last node's own right edge.
fn draw_tree(
    canvas: &mut dyn Canvas,
    tree: HypTree,
    margin: f64,
    heights: &[f64],
    x: f64,
    y: f64,
    level: usize,
) {
    let row = heights.get(level).copied().unwrap_or(0.0);
    if level < tree.level {
        draw_tree(canvas, tree, margin, heights, x, y + row, level + 1);
        return;
    }

    let tactic_height = tree.tactic.size().height;
    let x0 = x;
    let mut x = x;
    let mut last_node_x = x;
    for node in tree.nodes {
        let node_width = node.element.element.size().width;
        node.element.element.draw(canvas, Point::new(x, y + tactic_height));
        last_node_x = x + node_width;
        let mut advance = node_width;
        if let Some(child) = node.child {
            advance = advance.max(tree_width(margin, &child));
            draw_tree(canvas, child, margin, heights, x, y + row, level + 1);
        }
        x += advance + margin;
    }
    // The spanning width is only known after the nodes are placed.
    tree.tactic
        .draw_stretched(canvas, Point::new(x0, y), last_node_x - x0);
}
