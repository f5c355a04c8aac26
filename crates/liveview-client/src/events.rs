//! Connection lifecycle hooks.
//!
//! The callback registrations of the original event API are a single
//! polymorphic handler here, dispatched from the connection task.

/// Hooks invoked by [`LiveViewClient`](crate::LiveViewClient) on connection
/// lifecycle transitions.
///
/// All methods default to no-ops. Dispatch is single-threaded from the
/// connection task; handlers must not block.
pub trait ClientEvents: Send {
    /// Called once per established connection.
    fn on_open(&mut self) {}

    /// Called after a frame has been applied and rendered.
    ///
    /// `page` is the snapshot that was just rendered.
    fn on_message(&mut self, page: &str) {
        let _ = page;
    }

    /// Called when the socket closes or a connection attempt fails.
    ///
    /// Close reasons are not distinguished; every close is followed by one
    /// scheduled reconnect attempt.
    fn on_close(&mut self) {}
}

/// Default handler doing nothing.
pub(crate) struct NoopEvents;

impl ClientEvents for NoopEvents {}
