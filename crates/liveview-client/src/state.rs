//! Client state.
//!
//! The state object the hosting environment used to inject globally is an
//! explicit struct here, constructed before the connection is opened and
//! owned by the client for its whole lifetime.

/// Current view state of the client.
///
/// Overwritten wholesale on every inbound frame, never partially mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientState {
    /// Opaque token identifying the server-side view this client subscribes to.
    pub page_id: String,
    /// Full HTML snapshot of the current render.
    pub page: String,
}

impl ClientState {
    /// Create state with a pre-populated initial snapshot.
    #[must_use]
    pub fn new(page_id: impl Into<String>, initial_page: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            page: initial_page.into(),
        }
    }
}

/// Connection lifecycle state.
///
/// Loops `Disconnected -> Connecting -> Connected -> Disconnected`
/// indefinitely; there is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    /// No socket is live; a reconnect may be pending.
    Disconnected,
    /// A connection attempt is in flight.
    Connecting,
    /// The socket is established and frames are being consumed.
    Connected,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_state_carries_initial_snapshot() {
        let state = ClientState::new("index", "<p>hello</p>");
        assert_eq!(state.page_id, "index");
        assert_eq!(state.page, "<p>hello</p>");
    }

    #[test]
    fn test_new_state_empty_snapshot() {
        let state = ClientState::new("index", "");
        assert_eq!(state.page, "");
    }
}
