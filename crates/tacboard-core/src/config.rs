#![forbid(unsafe_code)]

//! User-facing rendering options.

use serde::{Deserialize, Serialize};

/// Options controlling what the proof diagram shows.
///
/// Threaded by value through the whole build, never read from ambient
/// state. The JSON shape matches the editor extension's settings payload,
/// so partial payloads fill in from [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiConfig {
    /// Hide machine-generated hypotheses (ids carrying the `null` marker).
    pub hide_nulls: bool,
    /// Suppress the owner-name title row on window frames.
    pub hide_owner_titles: bool,
    /// Append each shape's external key to its label text. Debug aid.
    pub show_ids: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            hide_nulls: true,
            hide_owner_titles: false,
            show_ids: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hide_nulls_only() {
        let cfg = UiConfig::default();
        assert!(cfg.hide_nulls);
        assert!(!cfg.hide_owner_titles);
        assert!(!cfg.show_ids);
    }

    #[test]
    fn parses_camel_case_and_fills_missing_fields() {
        let cfg: UiConfig = serde_json::from_str(r#"{"hideOwnerTitles":true}"#).unwrap();
        assert!(cfg.hide_nulls);
        assert!(cfg.hide_owner_titles);
        assert!(!cfg.show_ids);
    }

    #[test]
    fn round_trips_through_json() {
        let cfg = UiConfig {
            hide_nulls: false,
            hide_owner_titles: true,
            show_ids: true,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(serde_json::from_str::<UiConfig>(&json).unwrap(), cfg);
        assert!(json.contains("hideNulls"));
    }
}
