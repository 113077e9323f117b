use dioxus::prelude::*;
use overmark_engine::NodeId;

use crate::ui::layout::Word;

/// The content layer: every word absolutely positioned on the layout grid so
/// overlays computed from the same grid line up with the text exactly.
#[component]
pub fn DocumentView(
    words: Vec<Word>,
    on_word_down: EventHandler<NodeId>,
    on_word_over: EventHandler<NodeId>,
) -> Element {
    rsx! {
        div {
            class: "document-content",
            for word in words.iter() {
                span {
                    key: "{word.id.0}",
                    class: "document-word",
                    style: "left: {word.x}px; top: {word.y}px;",
                    onmousedown: {
                        let id = word.id;
                        move |evt: Event<MouseData>| {
                            // Keep the surface's deselect handler out of it.
                            evt.stop_propagation();
                            on_word_down.call(id);
                        }
                    },
                    onmouseover: {
                        let id = word.id;
                        move |_| on_word_over.call(id)
                    },
                    "{word.text}"
                }
            }
        }
    }
}
