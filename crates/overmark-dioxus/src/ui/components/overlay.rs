use dioxus::prelude::*;
use overmark_engine::OverlayProps;

use crate::ui::layout::{Rect, SURFACE_ORIGIN_X, SURFACE_ORIGIN_Y};

/// One highlight's overlay: its rectangles plus, while the highlight is
/// editable and hovered, a removal affordance.
#[component]
pub fn HighlightOverlay(overlay: OverlayProps<String>, rects: Vec<Rect>) -> Element {
    let hovered = overlay.mouse_client_position.is_some_and(|pointer| {
        let x = pointer.x - SURFACE_ORIGIN_X;
        let y = pointer.y - SURFACE_ORIGIN_Y;
        rects.iter().any(|rect| rect.contains(x, y))
    });
    let rect_class = if overlay.editable && hovered {
        "highlight-rect is-hovered"
    } else {
        "highlight-rect"
    };
    let remove_anchor = if overlay.editable && hovered {
        rects.first().copied()
    } else {
        None
    };
    let on_remove = overlay.on_remove_highlight.clone();
    let removal_key = overlay.highlight_key.clone();

    rsx! {
        div {
            class: "highlight-overlay",
            "data-highlight-key": "{overlay.highlight_key}",
            "data-offset-parent": "{overlay.offset_parent}",
            for (index, rect) in rects.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "{rect_class}",
                    style: "left: {rect.x}px; top: {rect.y}px; width: {rect.width}px; height: {rect.height}px; z-index: {overlay.z_indexes.below_content};",
                }
            }
            if let Some(anchor) = remove_anchor {
                button {
                    class: "highlight-remove",
                    style: "left: {anchor.x}px; top: {anchor.y}px; z-index: {overlay.z_indexes.above_content};",
                    onmousedown: |evt: Event<MouseData>| evt.stop_propagation(),
                    onclick: move |_| on_remove.call(removal_key.clone()),
                    "✕"
                }
            }
        }
    }
}
