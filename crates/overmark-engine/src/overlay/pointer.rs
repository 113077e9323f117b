use log::debug;

use crate::models::ClientPoint;

/// Registration seam for the process-wide pointer-move subscription.
///
/// The embedding host implements this against whatever observer API it has
/// (a DOM listener, a winit event filter, a webview bridge). `PointerTracker`
/// is the only caller; it guarantees `attach` and `detach` alternate and that
/// `detach` is never called on a source that is not attached.
pub trait PointerEventSource {
    fn attach(&mut self);
    fn detach(&mut self);
}

/// Owns the pointer-move subscription and the last observed pointer position.
///
/// The subscription exists iff editing is enabled, and the position is known
/// only while the subscription exists. Disabling editing clears the position
/// so a later re-enable cannot reuse stale coordinates before the next move
/// event arrives.
#[derive(Debug, Default)]
pub struct PointerTracker {
    attached: bool,
    position: Option<ClientPoint>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synchronize the subscription with the owner's editing flag.
    ///
    /// Attaches on a false→true transition, detaches (and forgets the
    /// position) on true→false, and is a no-op when the flag is unchanged.
    pub fn sync(&mut self, editing: bool, source: &mut dyn PointerEventSource) {
        if editing && !self.attached {
            source.attach();
            self.attached = true;
            debug!("pointer-move subscription attached");
        } else if !editing && self.attached {
            source.detach();
            self.attached = false;
            self.position = None;
            debug!("pointer-move subscription detached");
        }
    }

    /// Record a move event's viewport coordinates.
    ///
    /// Every event overwrites the position; there is no throttling or
    /// coalescing. Events that race a detach are dropped, keeping the
    /// position unknown while no subscription exists.
    pub fn record_move(&mut self, at: ClientPoint) {
        if self.attached {
            self.position = Some(at);
        }
    }

    pub fn position(&self) -> Option<ClientPoint> {
        self.position
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Final deactivation: release the subscription if it is held.
    pub fn shutdown(&mut self, source: &mut dyn PointerEventSource) {
        if self.attached {
            source.detach();
            self.attached = false;
            self.position = None;
            debug!("pointer-move subscription released on shutdown");
        }
    }
}
