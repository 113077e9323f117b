use std::fs;
use std::path::PathBuf;

use dioxus::prelude::*;
use overmark_config::LayerConfig;
use overmark_engine::{Highlight, TextRange, ZIndexes};
use uuid::Uuid;

use crate::ui::components::HighlightLayer;
use crate::ui::layout::DocumentModel;

const OVERMARK_CSS: &str = include_str!("../assets/overmark.css");

const FALLBACK_CONTENT: &str = "overmark could not read the configured content file. \
Select some of this placeholder text to try the highlighter anyway.";

#[component]
pub fn App(content_path: PathBuf, layers: LayerConfig) -> Element {
    let document = use_signal(|| match fs::read_to_string(&content_path) {
        Ok(text) => DocumentModel::from_text(&text),
        Err(e) => {
            log::error!("failed to read content file {}: {e}", content_path.display());
            DocumentModel::from_text(FALLBACK_CONTENT)
        }
    });

    let mut highlights = use_signal(Vec::<(String, Highlight)>::new);
    let mut editing = use_signal(|| true);

    // The candidate builder: reject any selection that overlaps a highlight
    // the user already has.
    let build_highlight = Callback::new(move |range: TextRange| -> Option<Highlight> {
        let taken = highlights.read();
        if taken
            .iter()
            .any(|(_, existing)| ranges_overlap(existing.range(), &range))
        {
            None
        } else {
            Some(Highlight::new(range))
        }
    });

    rsx! {
        style { {OVERMARK_CSS} }
        div {
            class: "app-container",
            header {
                class: "toolbar",
                h1 { "overmark" }
                span {
                    class: "toolbar-count",
                    "{highlights.read().len()} highlights"
                }
                button {
                    class: "toolbar-toggle",
                    onclick: move |_| {
                        let enabled = !*editing.read();
                        editing.set(enabled);
                    },
                    if *editing.read() { "Done" } else { "Edit highlights" }
                }
            }
            HighlightLayer {
                document: ReadOnlySignal::from(document),
                highlights: highlights.read().clone(),
                editing: *editing.read(),
                z_indexes: ZIndexes::new(layers.above_content, layers.below_content),
                build_highlight: build_highlight,
                on_add_highlight: move |highlight: Highlight| {
                    let key = Uuid::new_v4().to_string();
                    log::info!("adding highlight {key}");
                    highlights.write().push((key, highlight));
                },
                on_remove_highlight: move |key: String| {
                    log::info!("removing highlight {key}");
                    highlights.write().retain(|(existing, _)| existing != &key);
                },
            }
        }
    }
}

/// Word-level interval intersection: two ranges overlap when neither ends
/// before the other starts.
pub(crate) fn ranges_overlap(a: &TextRange, b: &TextRange) -> bool {
    a.start.node <= b.end.node && b.start.node <= a.end.node
}

#[cfg(test)]
mod tests {
    use super::*;
    use overmark_engine::{ContentPoint, NodeId};

    fn range(first: usize, last: usize) -> TextRange {
        TextRange::new(
            ContentPoint::new(NodeId(first), 0),
            ContentPoint::new(NodeId(last), 3),
        )
    }

    #[test]
    fn touching_ranges_overlap_at_the_shared_word() {
        assert!(ranges_overlap(&range(0, 2), &range(2, 4)));
    }

    #[test]
    fn contained_ranges_overlap() {
        assert!(ranges_overlap(&range(0, 9), &range(3, 4)));
        assert!(ranges_overlap(&range(3, 4), &range(0, 9)));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        assert!(!ranges_overlap(&range(0, 1), &range(3, 4)));
        assert!(!ranges_overlap(&range(3, 4), &range(0, 1)));
    }
}
