#![forbid(unsafe_code)]

//! Shape-key derivation.
//!
//! Keys are deterministic functions of stable snapshot ids, so rebuilding
//! the same snapshot addresses the same shapes. Hypothesis and goal labels
//! use the node id itself and goal-column tactic labels use the tactic id;
//! everything that is not one-to-one with a snapshot id gets a prefix here.

/// Key of a window's frame shape.
#[must_use]
pub fn window(window_id: &str) -> String {
    format!("window-{window_id}")
}

/// Key of a window's owner-title row.
#[must_use]
pub fn window_title(window_id: &str) -> String {
    format!("window-name-node-{window_id}")
}

/// Key of the per-arrow tactic label inside a hypothesis forest.
///
/// One tactic can fan out through several hypothesis arrows; the source id
/// keeps those labels distinct.
#[must_use]
pub fn forest_tactic(tactic_id: &str, from_id: Option<&str>) -> String {
    format!("tactic-{tactic_id}-{}", from_id.unwrap_or("none"))
}
