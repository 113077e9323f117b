use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use overmark_engine::{
    ClientPoint, ControllerProps, Highlight, NodeId, OverlayController, SelectionSource, TextRange,
    ZIndexes,
};

use crate::ui::components::{DocumentView, HighlightOverlay, HighlightTooltip};
use crate::ui::layout::{DocumentModel, Rect, SURFACE_ID};
use crate::ui::pointer::WebviewPointerEvents;
use crate::ui::selection::WordSelection;

/// Localized by the embedding application; the viewer ships English only.
const ADD_HIGHLIGHT_LABEL: &str = "Add highlight";

/// Hosts the overlay controller and bridges webview events into it.
///
/// The surface div wraps the content layer, the per-highlight overlays and
/// the confirmation tooltip, so everything positions against the same
/// anchor. Pointer and selection events mutate the retained collaborators
/// and bump `revision`, which is what re-renders this component between prop
/// changes.
#[component]
pub fn HighlightLayer(
    document: ReadOnlySignal<DocumentModel>,
    highlights: Vec<(String, Highlight)>,
    editing: bool,
    z_indexes: ZIndexes,
    build_highlight: Callback<TextRange, Option<Highlight>>,
    on_add_highlight: EventHandler<Highlight>,
    on_remove_highlight: EventHandler<String>,
) -> Element {
    let controller = use_hook(|| Rc::new(RefCell::new(OverlayController::new())));
    let selection = use_hook(|| Rc::new(RefCell::new(WordSelection::new())));
    let pointer_events = use_hook(|| Rc::new(RefCell::new(WebviewPointerEvents::new())));
    let mut revision = use_signal(|| 0u64);

    // Reading the revision subscribes this component to pointer and
    // selection updates, which arrive outside the props.
    let _ = revision();

    // Read-only mode disables the selection collaborator outright.
    if !editing {
        selection.borrow_mut().clear();
    }

    {
        let controller = controller.clone();
        let pointer_events = pointer_events.clone();
        use_drop(move || {
            controller
                .borrow_mut()
                .teardown(&mut *pointer_events.borrow_mut());
        });
    }

    let props = ControllerProps {
        build_highlight: Rc::new(move |range: &TextRange| build_highlight.call(*range)),
        editable: editing,
        highlights: highlights.clone(),
        offset_parent: SURFACE_ID.to_string(),
        on_add_highlight: overmark_engine::Callback::new(move |highlight: Highlight| {
            on_add_highlight.call(highlight);
        }),
        on_remove_highlight: overmark_engine::Callback::new(move |key: String| {
            log::debug!("removal requested for highlight {key}");
            on_remove_highlight.call(key);
        }),
        z_indexes,
        add_label: ADD_HIGHLIGHT_LABEL.to_string(),
    };

    let frame = controller.borrow_mut().render(
        &props,
        &*selection.borrow(),
        &mut *pointer_events.borrow_mut(),
    );

    // The in-progress candidate, drawn by the viewer itself so the user sees
    // what a confirmed highlight would cover.
    let preview_rects: Vec<Rect> = {
        let snapshot = selection
            .borrow()
            .sample(editing, &|range: &TextRange| build_highlight.call(*range));
        snapshot
            .tracked
            .as_ref()
            .map(|tracked| document.read().range_rects(tracked.proposed_highlight.range()))
            .unwrap_or_default()
    };

    let tooltip = frame.tooltip.clone();

    rsx! {
        div {
            id: SURFACE_ID,
            class: "overmark-surface",
            onmousemove: {
                let controller = controller.clone();
                let pointer_events = pointer_events.clone();
                move |evt: Event<MouseData>| {
                    if pointer_events.borrow().is_listening() {
                        let coords = evt.client_coordinates();
                        controller
                            .borrow_mut()
                            .pointer_moved(ClientPoint::new(coords.x, coords.y));
                        revision += 1;
                    }
                }
            },
            onmousedown: {
                let selection = selection.clone();
                move |_| {
                    // A press on the bare surface drops any live selection;
                    // words stop propagation before this runs.
                    selection.borrow_mut().clear();
                    revision += 1;
                }
            },
            onmouseup: {
                let selection = selection.clone();
                move |_| {
                    if selection.borrow().is_dragging() {
                        selection.borrow_mut().finish();
                        revision += 1;
                    }
                }
            },
            DocumentView {
                words: document.read().words().to_vec(),
                on_word_down: {
                    let selection = selection.clone();
                    move |id: NodeId| {
                        if !editing {
                            return;
                        }
                        let len = document
                            .read()
                            .word(id)
                            .map(|word| word.char_len())
                            .unwrap_or_default();
                        selection.borrow_mut().begin(id, len);
                        revision += 1;
                    }
                },
                on_word_over: {
                    let selection = selection.clone();
                    move |id: NodeId| {
                        if !selection.borrow().is_dragging() {
                            return;
                        }
                        let len = document
                            .read()
                            .word(id)
                            .map(|word| word.char_len())
                            .unwrap_or_default();
                        selection.borrow_mut().extend(id, len);
                        revision += 1;
                    }
                },
            }
            for (index, rect) in preview_rects.iter().enumerate() {
                div {
                    key: "preview-{index}",
                    class: "selection-preview",
                    style: "left: {rect.x}px; top: {rect.y}px; width: {rect.width}px; height: {rect.height}px; z-index: {z_indexes.below_content};",
                }
            }
            for overlay in frame.overlays.clone() {
                HighlightOverlay {
                    key: "{overlay.highlight_key}",
                    rects: document.read().range_rects(overlay.highlight.range()),
                    overlay: overlay,
                }
            }
            if let Some(tooltip) = tooltip {
                HighlightTooltip {
                    position: document.read().point_position(&tooltip.focus),
                    tooltip: tooltip,
                    on_confirm: {
                        let controller = controller.clone();
                        let selection = selection.clone();
                        move |proposed: Highlight| {
                            let on_add = overmark_engine::Callback::new(move |highlight| {
                                on_add_highlight.call(highlight);
                            });
                            controller.borrow().commit_proposal(
                                &on_add,
                                proposed,
                                &mut *selection.borrow_mut(),
                            );
                            revision += 1;
                        }
                    },
                }
            }
        }
    }
}
