use std::rc::Rc;

use log::debug;

use crate::models::{Callback, ClientPoint, Highlight, TextRange, ZIndexes};
use crate::overlay::arena::OverlayArena;
use crate::overlay::frame::{Frame, OverlayProps, TooltipProps};
use crate::overlay::pointer::{PointerEventSource, PointerTracker};
use crate::overlay::selection::{ProposalState, SelectionSource};

/// Owner-supplied configuration for one render pass.
///
/// The controller holds none of this across renders; the owner passes the
/// current values every time, and set mutations requested through the
/// callbacks are only reflected once the owner renders again with an updated
/// set.
#[derive(Clone)]
pub struct ControllerProps<A> {
    /// Candidate builder forwarded unchanged to the selection collaborator.
    pub build_highlight: Rc<dyn Fn(&TextRange) -> Option<Highlight>>,
    /// Editing mode: gates the pointer subscription, the removal affordances
    /// and the proposal workflow. Read-only mode renders plain overlays.
    pub editable: bool,
    /// The owner's keyed highlight set. Keys are unique; the supplied order
    /// only matters for newly appearing keys.
    pub highlights: Vec<(String, Highlight)>,
    /// Positioning anchor handle, passed through to every collaborator.
    pub offset_parent: A,
    pub on_add_highlight: Callback<Highlight>,
    pub on_remove_highlight: Callback<String>,
    pub z_indexes: ZIndexes,
    /// Localized label for the confirmation tooltip.
    pub add_label: String,
}

/// Orchestrates the highlight overlays and the proposal/commit workflow.
///
/// The controller's only retained state is the pointer tracker and the keyed
/// overlay arena; everything else is recomputed per render from the owner's
/// props and the sampled selection.
#[derive(Debug, Default)]
pub struct OverlayController {
    tracker: PointerTracker,
    arena: OverlayArena,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one render pass and describe what to draw.
    ///
    /// Synchronizes the pointer subscription with the editing flag, samples
    /// the selection collaborator, reconciles the overlay arena against the
    /// owner's set, and fans the set out into per-highlight props plus an
    /// optional confirmation tooltip.
    pub fn render<A: Clone>(
        &mut self,
        props: &ControllerProps<A>,
        selection: &dyn SelectionSource,
        events: &mut dyn PointerEventSource,
    ) -> Frame<A> {
        self.tracker.sync(props.editable, events);

        let snapshot = selection.sample(props.editable, props.build_highlight.as_ref());
        let state = snapshot.proposal_state();

        self.arena.reconcile(&props.highlights);

        // While a proposal is pending, existing highlights drop to read-only
        // so the confirmation affordance never competes with their click
        // targets.
        let overlays_editable = props.editable && snapshot.tracked.is_none();

        let overlays = self
            .arena
            .slots()
            .iter()
            .map(|slot| OverlayProps {
                editable: overlays_editable,
                highlight: slot.highlight().clone(),
                highlight_key: slot.key().to_string(),
                mouse_client_position: self.tracker.position(),
                offset_parent: props.offset_parent.clone(),
                on_remove_highlight: props.on_remove_highlight.clone(),
                z_indexes: props.z_indexes,
            })
            .collect();

        let tooltip = match snapshot.tracked {
            Some(tracked) if props.editable && state == ProposalState::Proposed => {
                Some(TooltipProps {
                    label: props.add_label.clone(),
                    proposed_highlight: tracked.proposed_highlight,
                    focus: tracked.focus,
                    offset_parent: props.offset_parent.clone(),
                    z_index: props.z_indexes.above_content,
                })
            }
            _ => None,
        };

        Frame { overlays, tooltip }
    }

    /// Feed a pointer-move event observed by the host's subscription.
    ///
    /// The host is expected to render again afterwards so the new position
    /// reaches the overlay renderers.
    pub fn pointer_moved(&mut self, at: ClientPoint) {
        self.tracker.record_move(at);
    }

    /// Commit the proposal the tooltip was rendered for.
    ///
    /// Invokes the owner's add callback with the render-time candidate, then
    /// collapses the live selection to its end point so the next render comes
    /// back idle. The collapse is skipped when no live selection exists; the
    /// callback fires regardless.
    pub fn commit_proposal(
        &self,
        on_add_highlight: &Callback<Highlight>,
        proposed: Highlight,
        selection: &mut dyn SelectionSource,
    ) {
        debug!("committing proposed highlight");
        on_add_highlight.call(proposed);
        if selection.has_selection() {
            selection.collapse_to_focus();
        }
    }

    /// Final deactivation: release the pointer subscription.
    pub fn teardown(&mut self, events: &mut dyn PointerEventSource) {
        self.tracker.shutdown(events);
    }
}
