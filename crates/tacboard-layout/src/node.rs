#![forbid(unsafe_code)]

//! Labeled leaf construction.

use tacboard_canvas::{Canvas, LabelKind, LabelShape, ShapeId};
use tacboard_core::UiConfig;
use tacboard_model::HypNode;

use crate::build::BuildContext;
use crate::element::{Element, IdElement};

/// True when configuration hides this machine-generated hypothesis.
pub(crate) fn should_hide(node: &HypNode, config: UiConfig) -> bool {
    config.hide_nulls && node.id.contains("null")
}

/// Display text of a hypothesis: `name: text` when named, bare text
/// otherwise.
pub(crate) fn hyp_display_text(node: &HypNode) -> String {
    match &node.name {
        Some(name) => format!("{name}: {}", node.text),
        None => node.text.clone(),
    }
}

/// Measure a label, intern its shape id, and wrap both in an element that
/// emits exactly one `draw_label`.
///
/// `highlight_ids` drives the current-goal highlight; only goal nodes ever
/// pass a non-empty list.
pub(crate) fn text_node<C: Canvas>(
    canvas: &mut C,
    ctx: &BuildContext<'_>,
    parent: Option<ShapeId>,
    text: String,
    kind: LabelKind,
    external_key: &str,
    highlight_ids: &[&str],
) -> IdElement {
    let text = if ctx.config.show_ids {
        format!("{text}      {external_key}")
    } else {
        text
    };
    let id = canvas.create_shape_id(external_key);
    let size = canvas.measure_text(&text);
    let highlighted = highlight_ids.contains(&ctx.current_goal);
    let element = Element::new(size, move |canvas, origin, preferred| {
        let width = preferred.filter(|p| *p > size.width).unwrap_or(size.width);
        canvas.draw_label(LabelShape {
            id,
            parent,
            x: origin.x,
            y: origin.y,
            width,
            height: size.height,
            text: &text,
            kind,
            highlighted,
        });
    });
    IdElement { id, element }
}

/// Hypothesis box for one node.
pub(crate) fn hyp_node<C: Canvas>(
    canvas: &mut C,
    ctx: &BuildContext<'_>,
    parent: Option<ShapeId>,
    node: &HypNode,
) -> IdElement {
    text_node(
        canvas,
        ctx,
        parent,
        hyp_display_text(node),
        LabelKind::Hypothesis,
        &node.id,
        &[],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: &str, name: Option<&str>, text: &str) -> HypNode {
        HypNode {
            id: id.into(),
            text: text.into(),
            name: name.map(str::to_owned),
        }
    }

    #[test]
    fn display_text_prefixes_the_owning_name() {
        assert_eq!(hyp_display_text(&named("h", Some("hn"), "n = 5")), "hn: n = 5");
        assert_eq!(hyp_display_text(&named("h", None, "n = 5")), "n = 5");
    }

    #[test]
    fn hiding_applies_to_null_ids_only_when_enabled() {
        let hidden = named("null-3", None, "?");
        let visible = named("h1", None, "?");
        let on = UiConfig::default();
        let off = UiConfig {
            hide_nulls: false,
            ..UiConfig::default()
        };
        assert!(should_hide(&hidden, on));
        assert!(!should_hide(&visible, on));
        assert!(!should_hide(&hidden, off));
    }
}
