#![forbid(unsafe_code)]

//! Proof-state snapshot model.
//!
//! Mirrors the JSON payload produced by the proof-state provider: a flat
//! list of windows (lexical proof scopes) and tactics, with hypothesis and
//! goal nodes keyed by stable external ids. Field names on the wire are
//! camelCase.
//!
//! The model is a passive snapshot. Window parent/child relationships are
//! derived by scanning `parent_id`, never stored, and every cross-reference
//! (arrow sources and targets, spawned scopes, success markers) is by id;
//! dangling ids are the consumer's problem to degrade over, not a parse
//! error.

use serde::{Deserialize, Serialize};

/// Hypotheses introduced together by one proof step.
pub type HypLayer = Vec<HypNode>;

/// One hypothesis box.
///
/// Ids containing the `null` marker denote machine-generated hypotheses
/// the UI may hide; unlike every other id they can repeat within a
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HypNode {
    pub id: String,
    pub text: String,
    /// Owning name, when the hypothesis is named.
    #[serde(default)]
    pub name: Option<String>,
}

/// One goal box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalNode {
    pub id: String,
    pub text: String,
    /// Owner username, or `"[anonymous]"`.
    pub name: String,
}

/// Hypothesis edge induced by a tactic: what it consumed and produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HypArrow {
    /// Consumed hypothesis, when the tactic rewrote an existing one.
    #[serde(default)]
    pub from_id: Option<String>,
    pub to_ids: Vec<String>,
}

/// Goal-to-tactic edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalArrow {
    pub from_id: String,
}

/// One executed tactic and the edges it induced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tactic {
    pub id: String,
    /// Source text as the user wrote it.
    pub text: String,
    #[serde(default)]
    pub hyp_arrows: Vec<HypArrow>,
    #[serde(default)]
    pub goal_arrows: Vec<GoalArrow>,
    /// Set when the tactic closed this goal.
    #[serde(default)]
    pub success_goal_id: Option<String>,
    /// Set when the tactic spawned a nested scope (`have` and friends).
    #[serde(default)]
    pub have_window_id: Option<String>,
}

/// One lexical proof scope, rendered as a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub id: String,
    /// `None` for the root scope.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Ordered hypothesis layers, oldest first.
    #[serde(default)]
    pub hyp_nodes: Vec<HypLayer>,
    /// Ordered goal nodes, oldest first.
    #[serde(default)]
    pub goal_nodes: Vec<GoalNode>,
}

/// A complete proof-state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofTree {
    pub windows: Vec<Window>,
    pub tactics: Vec<Tactic>,
}

impl ProofTree {
    /// Parse a snapshot from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The parentless window, if the snapshot has one.
    #[must_use]
    pub fn root_window(&self) -> Option<&Window> {
        self.windows.iter().find(|w| w.parent_id.is_none())
    }

    /// Child windows of `parent_id`, in declaration order.
    pub fn children_of<'a>(&'a self, parent_id: &'a str) -> impl Iterator<Item = &'a Window> {
        self.windows
            .iter()
            .filter(move |w| w.parent_id.as_deref() == Some(parent_id))
    }

    /// The first tactic that advanced or closed the given goal.
    #[must_use]
    pub fn tactic_for_goal(&self, goal_id: &str) -> Option<&Tactic> {
        self.tactics.iter().find(|t| {
            t.goal_arrows.iter().any(|a| a.from_id == goal_id)
                || t.success_goal_id.as_deref() == Some(goal_id)
        })
    }

    /// The scope a tactic spawned, if it names one that exists.
    #[must_use]
    pub fn have_window(&self, tactic: &Tactic) -> Option<&Window> {
        let id = tactic.have_window_id.as_deref()?;
        self.windows.iter().find(|w| w.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProofTree {
        ProofTree::from_json(
            r#"{
                "windows": [
                    {
                        "id": "1",
                        "parentId": null,
                        "hypNodes": [
                            [{"id": "h1", "text": "n = 5", "name": "hn"}],
                            [{"id": "h2", "text": "5 = 5", "name": null}]
                        ],
                        "goalNodes": [{"id": "g1", "text": "⊢ n + 0 = 5", "name": "pf"}]
                    },
                    {"id": "2", "parentId": "1", "goalNodes": [{"id": "g2", "text": "⊢ True", "name": "[anonymous]"}]}
                ],
                "tactics": [
                    {
                        "id": "t1",
                        "text": "rw [hn]",
                        "hypArrows": [{"fromId": "h1", "toIds": ["h2"]}],
                        "goalArrows": [{"fromId": "g1"}]
                    },
                    {"id": "t2", "text": "trivial", "successGoalId": "g2", "haveWindowId": "2"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_camel_case_snapshot() {
        let tree = sample();
        assert_eq!(tree.windows.len(), 2);
        assert_eq!(tree.windows[0].hyp_nodes[0][0].name.as_deref(), Some("hn"));
        assert_eq!(tree.windows[0].hyp_nodes[1][0].name, None);
        assert_eq!(tree.tactics[0].hyp_arrows[0].from_id.as_deref(), Some("h1"));
        assert_eq!(tree.tactics[1].success_goal_id.as_deref(), Some("g2"));
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let tree = ProofTree::from_json(
            r#"{"windows": [{"id": "w", "goalNodes": []}], "tactics": [{"id": "t", "text": "skip"}]}"#,
        )
        .unwrap();
        assert_eq!(tree.windows[0].parent_id, None);
        assert!(tree.windows[0].hyp_nodes.is_empty());
        assert!(tree.tactics[0].hyp_arrows.is_empty());
        assert!(tree.tactics[0].goal_arrows.is_empty());
        assert_eq!(tree.tactics[0].have_window_id, None);
    }

    #[test]
    fn root_window_is_the_parentless_one() {
        let tree = sample();
        assert_eq!(tree.root_window().map(|w| w.id.as_str()), Some("1"));

        let orphans = ProofTree {
            windows: vec![Window {
                id: "2".into(),
                parent_id: Some("1".into()),
                hyp_nodes: vec![],
                goal_nodes: vec![],
            }],
            tactics: vec![],
        };
        assert!(orphans.root_window().is_none());
    }

    #[test]
    fn children_of_scans_in_declaration_order() {
        let tree = sample();
        let children: Vec<&str> = tree.children_of("1").map(|w| w.id.as_str()).collect();
        assert_eq!(children, ["2"]);
        assert_eq!(tree.children_of("2").count(), 0);
    }

    #[test]
    fn tactic_for_goal_matches_arrow_or_success() {
        let tree = sample();
        assert_eq!(tree.tactic_for_goal("g1").map(|t| t.id.as_str()), Some("t1"));
        assert_eq!(tree.tactic_for_goal("g2").map(|t| t.id.as_str()), Some("t2"));
        assert!(tree.tactic_for_goal("gX").is_none());
    }

    #[test]
    fn have_window_resolves_existing_scope_only() {
        let tree = sample();
        assert_eq!(
            tree.have_window(&tree.tactics[1]).map(|w| w.id.as_str()),
            Some("2")
        );
        assert!(tree.have_window(&tree.tactics[0]).is_none());

        let mut dangling = tree.clone();
        dangling.tactics[1].have_window_id = Some("missing".into());
        assert!(dangling.have_window(&dangling.tactics[1]).is_none());
    }
}
