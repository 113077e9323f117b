use crate::models::{ContentPoint, Highlight, TextRange};

/// The owner's candidate builder: turns a content range into a proposable
/// highlight, or `None` when the range is not currently valid for proposal
/// (for example, it overlaps an existing highlight).
pub type BuildHighlight<'a> = &'a dyn Fn(&TextRange) -> Option<Highlight>;

/// A not-yet-committed highlight candidate derived from the live selection,
/// plus the selection's focus point the confirmation tooltip anchors to.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedSelection {
    pub proposed_highlight: Highlight,
    pub focus: ContentPoint,
}

/// What the selection collaborator reports for one render pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionSnapshot {
    /// The current candidate, if the builder accepted the selected range.
    pub tracked: Option<TrackedSelection>,
    /// Whether the user is actively drag-selecting with the pointer.
    pub mouse_selecting: bool,
}

impl SelectionSnapshot {
    /// The proposal workflow state this snapshot puts the controller in.
    pub fn proposal_state(&self) -> ProposalState {
        match (&self.tracked, self.mouse_selecting) {
            (None, _) => ProposalState::Idle,
            (Some(_), true) => ProposalState::Selecting,
            (Some(_), false) => ProposalState::Proposed,
        }
    }
}

/// Interaction state derived from the selection collaborator's report.
///
/// Never stored: the controller recomputes it from a fresh snapshot on every
/// render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalState {
    /// No candidate; existing highlights keep their normal interactivity.
    Idle,
    /// A candidate exists but the pointer drag is still in progress, so the
    /// confirmation tooltip stays hidden.
    Selecting,
    /// The selection is finalized and the confirmation tooltip may show.
    Proposed,
}

/// Synchronous query interface to the live text selection.
///
/// The controller samples this at the start of every render pass instead of
/// holding any selection state of its own.
pub trait SelectionSource {
    /// Report the current selection, running the candidate range through the
    /// owner's builder. A disabled tracker reports no candidate.
    fn sample(&self, enabled: bool, build: BuildHighlight<'_>) -> SelectionSnapshot;

    /// Whether a live text selection exists right now.
    fn has_selection(&self) -> bool;

    /// Collapse the live selection to its end point, deselecting the text.
    fn collapse_to_focus(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeId;

    fn candidate() -> TrackedSelection {
        let range = TextRange::new(
            ContentPoint::new(NodeId(0), 0),
            ContentPoint::new(NodeId(2), 4),
        );
        TrackedSelection {
            proposed_highlight: Highlight::new(range),
            focus: ContentPoint::new(NodeId(2), 4),
        }
    }

    #[test]
    fn no_candidate_is_idle_even_mid_drag() {
        let snapshot = SelectionSnapshot {
            tracked: None,
            mouse_selecting: true,
        };
        assert_eq!(snapshot.proposal_state(), ProposalState::Idle);
    }

    #[test]
    fn candidate_mid_drag_is_selecting() {
        let snapshot = SelectionSnapshot {
            tracked: Some(candidate()),
            mouse_selecting: true,
        };
        assert_eq!(snapshot.proposal_state(), ProposalState::Selecting);
    }

    #[test]
    fn finalized_candidate_is_proposed() {
        let snapshot = SelectionSnapshot {
            tracked: Some(candidate()),
            mouse_selecting: false,
        };
        assert_eq!(snapshot.proposal_state(), ProposalState::Proposed);
    }
}
