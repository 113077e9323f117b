use crate::models::{Callback, ClientPoint, ContentPoint, Highlight, ZIndexes};

/// Input for one overlay-rendering collaborator instance.
///
/// `A` is the opaque handle to the positioning anchor all absolute
/// coordinates are computed relative to; the engine only passes it through.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayProps<A> {
    /// Whether this highlight currently exposes its removal affordance.
    pub editable: bool,
    pub highlight: Highlight,
    pub highlight_key: String,
    /// Last observed pointer position, for cursor-relative effects such as
    /// hover affordances. `None` outside editing mode.
    pub mouse_client_position: Option<ClientPoint>,
    pub offset_parent: A,
    pub on_remove_highlight: Callback<String>,
    pub z_indexes: ZIndexes,
}

/// Input for the confirmation tooltip shown for an in-progress proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipProps<A> {
    /// Localized confirmation label, supplied by the embedding application.
    pub label: String,
    /// The render-time candidate the commit operation consumes.
    pub proposed_highlight: Highlight,
    /// The selection's focus point the tooltip anchors to.
    pub focus: ContentPoint,
    pub offset_parent: A,
    pub z_index: i32,
}

/// Immutable description of everything to draw for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<A> {
    pub overlays: Vec<OverlayProps<A>>,
    pub tooltip: Option<TooltipProps<A>>,
}
