//! Word-level selection tracking for the viewer.
//!
//! Implements the engine's selection seam over mouse events on the rendered
//! word spans: mousedown anchors a selection, dragging over words moves its
//! head, mouseup finalizes it. The candidate range always runs through the
//! owner's highlight builder, which may reject it.

use overmark_engine::{
    BuildHighlight, ContentPoint, NodeId, SelectionSnapshot, SelectionSource, TextRange,
    TrackedSelection,
};

/// One endpoint of the in-progress selection: a word and its length in
/// characters.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Endpoint {
    node: NodeId,
    len: usize,
}

/// Tracks the live word selection the user is making with the pointer.
#[derive(Debug, Default)]
pub struct WordSelection {
    anchor: Option<Endpoint>,
    head: Option<Endpoint>,
    dragging: bool,
}

impl WordSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer went down on a word: start a fresh selection there.
    pub fn begin(&mut self, node: NodeId, len: usize) {
        let endpoint = Endpoint { node, len };
        self.anchor = Some(endpoint);
        self.head = Some(endpoint);
        self.dragging = true;
    }

    /// Pointer dragged over a word: move the selection head there.
    pub fn extend(&mut self, node: NodeId, len: usize) {
        if self.dragging {
            self.head = Some(Endpoint { node, len });
        }
    }

    /// Pointer released: the selection is finalized but stays live.
    pub fn finish(&mut self) {
        self.dragging = false;
    }

    /// Drop the selection entirely, e.g. on a click outside the content or
    /// when editing is disabled.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The selected range in document order plus the head endpoint.
    fn range(&self) -> Option<(TextRange, Endpoint)> {
        let anchor = self.anchor?;
        let head = self.head?;
        let (first, last) = if anchor.node <= head.node {
            (anchor, head)
        } else {
            (head, anchor)
        };
        let range = TextRange::new(
            ContentPoint::new(first.node, 0),
            ContentPoint::new(last.node, last.len),
        );
        Some((range, head))
    }
}

impl SelectionSource for WordSelection {
    fn sample(&self, enabled: bool, build: BuildHighlight<'_>) -> SelectionSnapshot {
        if !enabled {
            return SelectionSnapshot::default();
        }
        let Some((range, head)) = self.range() else {
            return SelectionSnapshot {
                tracked: None,
                mouse_selecting: self.dragging,
            };
        };
        let tracked = build(&range).map(|proposed_highlight| TrackedSelection {
            proposed_highlight,
            focus: ContentPoint::new(head.node, head.len),
        });
        SelectionSnapshot {
            tracked,
            mouse_selecting: self.dragging,
        }
    }

    fn has_selection(&self) -> bool {
        self.anchor.is_some() && self.head.is_some()
    }

    fn collapse_to_focus(&mut self) {
        // Dropping the anchor leaves the head as a caret: no range remains to
        // propose, so the next sample reports idle.
        self.anchor = None;
        self.dragging = false;
    }
}
