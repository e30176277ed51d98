//! Benchmarks for the proof-diagram layout pipeline.
//!
//! Run with: cargo bench -p tacboard-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use tacboard_canvas::RecordingCanvas;
use tacboard_core::UiConfig;
use tacboard_layout::build_proof_tree;
use tacboard_layout::sequence::rewrite_sequences;
use tacboard_model::{GoalArrow, GoalNode, HypArrow, HypLayer, HypNode, ProofTree, Tactic, Window};

fn hyp(id: String, text: String) -> HypNode {
    HypNode {
        id,
        text,
        name: None,
    }
}

fn goal(id: &str, text: &str) -> GoalNode {
    GoalNode {
        id: id.into(),
        text: text.into(),
        name: "[anonymous]".into(),
    }
}

/// One window whose hypothesis is rewritten `depth` times in a row: a
/// single rewrite sequence nesting one column `depth` levels deep.
fn rewrite_chain(depth: usize) -> ProofTree {
    let layers: Vec<HypLayer> = (0..depth)
        .map(|i| vec![hyp(format!("h{i}"), format!("a + {i} = b"))])
        .collect();
    let tactics: Vec<Tactic> = (1..depth)
        .map(|i| Tactic {
            id: format!("t{i}"),
            text: format!("rw [step_{i}] at ha"),
            hyp_arrows: vec![HypArrow {
                from_id: Some(format!("h{}", i - 1)),
                to_ids: vec![format!("h{i}")],
            }],
            goal_arrows: vec![],
            success_goal_id: None,
            have_window_id: None,
        })
        .collect();
    ProofTree {
        windows: vec![Window {
            id: "w".into(),
            parent_id: None,
            hyp_nodes: layers,
            goal_nodes: vec![goal("g", "⊢ a = b")],
        }],
        tactics,
    }
}

/// One tactic fanning a hypothesis out into `width` products, so its
/// label spans the whole produced row.
fn fanout(width: usize) -> ProofTree {
    let products: HypLayer = (0..width)
        .map(|i| hyp(format!("c{i}"), format!("case {i}")))
        .collect();
    ProofTree {
        windows: vec![Window {
            id: "w".into(),
            parent_id: None,
            hyp_nodes: vec![vec![hyp("h0".into(), "n : Nat".into())], products],
            goal_nodes: vec![goal("g", "⊢ P n")],
        }],
        tactics: vec![Tactic {
            id: "t".into(),
            text: "rcases n".into(),
            hyp_arrows: vec![HypArrow {
                from_id: Some("h0".into()),
                to_ids: (0..width).map(|i| format!("c{i}")).collect(),
            }],
            goal_arrows: vec![],
            success_goal_id: None,
            have_window_id: None,
        }],
    }
}

/// A chain of `depth` scopes, each the parent of the next, each with its
/// own goal advanced by a tactic.
fn nested_scopes(depth: usize) -> ProofTree {
    let windows: Vec<Window> = (0..depth)
        .map(|i| Window {
            id: format!("w{i}"),
            parent_id: (i > 0).then(|| format!("w{}", i - 1)),
            hyp_nodes: vec![vec![hyp(format!("h{i}"), format!("d{i} : D"))]],
            goal_nodes: vec![goal(&format!("g{i}"), "⊢ Q")],
        })
        .collect();
    let tactics: Vec<Tactic> = (0..depth.saturating_sub(1))
        .map(|i| Tactic {
            id: format!("t{i}"),
            text: "refine ⟨?_, ?_⟩".into(),
            hyp_arrows: vec![],
            goal_arrows: vec![GoalArrow {
                from_id: format!("g{i}"),
            }],
            success_goal_id: None,
            have_window_id: None,
        })
        .collect();
    ProofTree { windows, tactics }
}

fn bench_rewrite_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/rewrite_chain");

    for depth in [4usize, 16, 64] {
        let tree = rewrite_chain(depth);
        let mut canvas = RecordingCanvas::new();
        group.bench_with_input(BenchmarkId::from_parameter(depth), &tree, |b, tree| {
            b.iter(|| {
                build_proof_tree(&mut canvas, tree, "g", UiConfig::default());
                black_box(canvas.shape_count())
            });
        });
    }

    group.finish();
}

fn bench_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/fanout");

    for width in [2usize, 8, 32] {
        let tree = fanout(width);
        let mut canvas = RecordingCanvas::new();
        group.bench_with_input(BenchmarkId::from_parameter(width), &tree, |b, tree| {
            b.iter(|| {
                build_proof_tree(&mut canvas, tree, "g", UiConfig::default());
                black_box(canvas.shape_count())
            });
        });
    }

    group.finish();
}

fn bench_nested_scopes(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/nested_scopes");

    for depth in [2usize, 4, 8] {
        let tree = nested_scopes(depth);
        let mut canvas = RecordingCanvas::new();
        group.bench_with_input(BenchmarkId::from_parameter(depth), &tree, |b, tree| {
            b.iter(|| {
                build_proof_tree(&mut canvas, tree, "g0", UiConfig::default());
                black_box(canvas.shape_count())
            });
        });
    }

    group.finish();
}

/// The grouping pass alone, without any canvas work.
fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/rewrite_sequences");

    for layers in [16usize, 64, 256] {
        // Every other boundary is linked, alternating merge and split.
        let tree = rewrite_chain(layers);
        let window = &tree.windows[0];
        let tactics: Vec<Tactic> = tree
            .tactics
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 2 == 0)
            .map(|(_, t)| t.clone())
            .collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(layers),
            &(window.hyp_nodes.clone(), tactics),
            |b, (layers, tactics)| {
                b.iter(|| black_box(rewrite_sequences(layers, tactics).len()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_rewrite_chain,
    bench_fanout,
    bench_nested_scopes,
    bench_grouping,
);

criterion_main!(benches);
