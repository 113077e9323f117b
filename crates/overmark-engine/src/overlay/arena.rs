use crate::models::Highlight;

/// One keyed overlay slot.
///
/// Slots are independent of one another; no two share mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySlot {
    key: String,
    highlight: Highlight,
}

impl OverlaySlot {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }
}

/// Stable ordered list of keyed overlay slots.
///
/// The owner's highlight set is a mapping with no meaningful order; the arena
/// gives the overlays a stable presentation order by reconciling per key:
/// kept keys stay where they are (their highlight refreshed in place), new
/// keys are appended in the order the owner supplies them, and keys that
/// disappeared are dropped.
#[derive(Debug, Default)]
pub struct OverlayArena {
    slots: Vec<OverlaySlot>,
}

impl OverlayArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the slots against the owner's current set.
    pub fn reconcile(&mut self, highlights: &[(String, Highlight)]) {
        self.slots
            .retain(|slot| highlights.iter().any(|(key, _)| *key == slot.key));

        for (key, highlight) in highlights {
            match self.slots.iter_mut().find(|slot| slot.key == *key) {
                Some(slot) => slot.highlight = highlight.clone(),
                None => self.slots.push(OverlaySlot {
                    key: key.clone(),
                    highlight: highlight.clone(),
                }),
            }
        }
    }

    pub fn slots(&self) -> &[OverlaySlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentPoint, NodeId, TextRange};
    use pretty_assertions::assert_eq;

    fn highlight(word: usize) -> Highlight {
        Highlight::new(TextRange::new(
            ContentPoint::new(NodeId(word), 0),
            ContentPoint::new(NodeId(word), 3),
        ))
    }

    fn keys(arena: &OverlayArena) -> Vec<&str> {
        arena.slots().iter().map(|slot| slot.key()).collect()
    }

    #[test]
    fn new_keys_append_in_supplied_order() {
        let mut arena = OverlayArena::new();

        arena.reconcile(&[("b".into(), highlight(1)), ("a".into(), highlight(0))]);

        assert_eq!(keys(&arena), vec!["b", "a"]);
    }

    #[test]
    fn kept_keys_hold_their_position_across_set_changes() {
        let mut arena = OverlayArena::new();
        arena.reconcile(&[("a".into(), highlight(0)), ("b".into(), highlight(1))]);

        // The owner reorders its mapping and adds a key; existing slots stay put.
        arena.reconcile(&[
            ("c".into(), highlight(2)),
            ("b".into(), highlight(1)),
            ("a".into(), highlight(0)),
        ]);

        assert_eq!(keys(&arena), vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_keys_are_dropped() {
        let mut arena = OverlayArena::new();
        arena.reconcile(&[
            ("a".into(), highlight(0)),
            ("b".into(), highlight(1)),
            ("c".into(), highlight(2)),
        ]);

        arena.reconcile(&[("a".into(), highlight(0)), ("c".into(), highlight(2))]);

        assert_eq!(keys(&arena), vec!["a", "c"]);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn kept_keys_refresh_their_highlight_in_place() {
        let mut arena = OverlayArena::new();
        arena.reconcile(&[("a".into(), highlight(0))]);

        arena.reconcile(&[("a".into(), highlight(5))]);

        assert_eq!(arena.slots()[0].highlight(), &highlight(5));
    }

    #[test]
    fn empty_set_empties_the_arena() {
        let mut arena = OverlayArena::new();
        arena.reconcile(&[("a".into(), highlight(0))]);

        arena.reconcile(&[]);

        assert!(arena.is_empty());
    }
}
