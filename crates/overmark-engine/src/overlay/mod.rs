/*!
 * # Overlay Orchestration Module
 *
 * This module coordinates the highlight overlays drawn above and below
 * rendered text content. It owns no highlight data of its own: the embedding
 * application supplies a keyed highlight set plus add/remove callbacks on
 * every render, and this module projects that set into per-highlight render
 * props while running the selection-to-highlight proposal workflow.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Owner for the Pointer Subscription
 * - The process-wide pointer-move subscription is owned exclusively by
 *   **`PointerTracker`**, which keeps it synchronized with the editing flag
 *   across the controller's full lifetime
 * - A guarded boolean makes attach/detach exactly-once per transition; no
 *   other component may touch the subscription
 * - The last observed pointer position is cleared the instant editing is
 *   disabled, so a later re-enable never sees stale coordinates
 *
 * ### 2. Selection as a Synchronous Query
 * - The live text selection is consumed through **`SelectionSource`**, a
 *   pure query sampled at the start of each render pass
 * - The proposal workflow (idle / selecting / proposed) is a function of the
 *   sampled snapshot; the controller stores no state for it
 *
 * ### 3. Keyed Overlay Arena
 * - **`OverlayArena`** keeps a stable ordered list of keyed overlay slots,
 *   reconciled against the owner's set on every render: kept keys are
 *   refreshed in place, new keys appended, missing keys dropped
 * - Slots are independent; no two share mutable state
 *
 * ### 4. Read API: Immutable Frames
 * - Each render pass produces a **`Frame`** describing exactly what to draw:
 *   one `OverlayProps` per highlight plus an optional `TooltipProps` for an
 *   in-progress proposal
 * - The embedding UI renders from frames and reports interaction back through
 *   the owner's callbacks
 *
 * ## Module Structure
 *
 * - **`pointer`**: editing-mode lifecycle for the move subscription and the
 *   ephemeral pointer position
 * - **`selection`**: the selection collaborator seam and proposal states
 * - **`arena`**: keyed slot reconciliation
 * - **`frame`**: the per-render output types
 * - **`controller`**: the orchestrator tying the above together
 */

pub mod arena;
pub mod controller;
pub mod frame;
pub mod pointer;
pub mod selection;

// Public API re-exports
pub use arena::{OverlayArena, OverlaySlot};
pub use controller::{ControllerProps, OverlayController};
pub use frame::{Frame, OverlayProps, TooltipProps};
pub use pointer::{PointerEventSource, PointerTracker};
pub use selection::{
    BuildHighlight, ProposalState, SelectionSnapshot, SelectionSource, TrackedSelection,
};
