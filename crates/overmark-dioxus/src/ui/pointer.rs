use log::debug;

use overmark_engine::PointerEventSource;

/// Pointer-move subscription backed by the webview's mousemove events.
///
/// The surface element always delivers mousemove events; this gate decides
/// whether they reach the overlay controller. An open gate is what
/// "attached" means for this host, so events arriving while the gate is
/// closed are dropped before the engine ever sees them.
#[derive(Debug, Default)]
pub struct WebviewPointerEvents {
    listening: bool,
}

impl WebviewPointerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

impl PointerEventSource for WebviewPointerEvents {
    fn attach(&mut self) {
        self.listening = true;
        debug!("mousemove gate opened");
    }

    fn detach(&mut self) {
        self.listening = false;
        debug!("mousemove gate closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_follows_attach_and_detach() {
        let mut events = WebviewPointerEvents::new();
        assert!(!events.is_listening());

        events.attach();
        assert!(events.is_listening());

        events.detach();
        assert!(!events.is_listening());
    }
}
