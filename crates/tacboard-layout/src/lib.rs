#![forbid(unsafe_code)]

//! Measure-then-place layout engine for proof diagrams.
//!
//! The pipeline is strictly two-phase: every [`element::Element`] knows its
//! size before anything is placed, and placement consumes the element, so
//! each shape is emitted exactly once. On top of that sit the two algorithms
//! that make proof states readable: a leveled forest layout ([`forest`])
//! that keeps derivation rows vertically aligned across sibling trees, and
//! a rewrite-sequence grouper ([`sequence`]) that decides which hypothesis
//! layers chain into one nested column.
//!
//! Entry point: [`build_proof_tree`], which walks a
//! [`ProofTree`](tacboard_model::ProofTree) snapshot from its root window,
//! draws everything onto a [`Canvas`](tacboard_canvas::Canvas), and hands
//! the finished scene to the backend's arrow pass.

mod build;
pub mod element;
pub mod forest;
mod node;
pub mod sequence;
mod window;

pub use build::{FRAME_PADDING, IN_BETWEEN_MARGIN, build_proof_tree};
