use dioxus::prelude::*;
use overmark_engine::{Highlight, TooltipProps};

use crate::ui::layout::LINE_HEIGHT;

/// Confirmation tooltip for an in-progress proposal, anchored just below the
/// selection's focus point.
#[component]
pub fn HighlightTooltip(
    tooltip: TooltipProps<String>,
    position: Option<(f64, f64)>,
    on_confirm: EventHandler<Highlight>,
) -> Element {
    let Some((x, y)) = position else {
        return rsx! {};
    };
    let top = y + LINE_HEIGHT;
    let proposed = tooltip.proposed_highlight.clone();

    rsx! {
        div {
            class: "highlight-tooltip",
            style: "left: {x}px; top: {top}px; z-index: {tooltip.z_index};",
            "data-offset-parent": "{tooltip.offset_parent}",
            onmousedown: |evt: Event<MouseData>| evt.stop_propagation(),
            button {
                class: "highlight-tooltip-confirm",
                onclick: move |_| on_confirm.call(proposed.clone()),
                "{tooltip.label}"
            }
        }
    }
}
