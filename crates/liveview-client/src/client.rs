//! Connection loop.
//!
//! Drives the `Disconnected -> Connecting -> Connected` cycle: at most one
//! socket is live at a time, and every close schedules exactly one
//! reconnect attempt after a fixed delay.

use std::time::Duration;

use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::error::ClientError;
use crate::events::{ClientEvents, NoopEvents};
use crate::options::ClientOptions;
use crate::protocol::ServerMessage;
use crate::render::Render;
use crate::state::{ClientState, ConnectionState};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Live view client.
///
/// Owns the view state, the snapshot sink and the event handler; all
/// mutation happens on the task driving [`run`](Self::run).
pub struct LiveViewClient {
    options: ClientOptions,
    state: ClientState,
    connection: ConnectionState,
    renderer: Box<dyn Render>,
    events: Box<dyn ClientEvents>,
}

impl LiveViewClient {
    /// Create a client with a no-op event handler.
    #[must_use]
    pub fn new(options: ClientOptions, renderer: Box<dyn Render>) -> Self {
        let state = ClientState::new(options.page_id.clone(), options.initial_page.clone());
        Self {
            options,
            state,
            connection: ConnectionState::Disconnected,
            renderer,
            events: Box::new(NoopEvents),
        }
    }

    /// Replace the event handler.
    #[must_use]
    pub fn with_events(mut self, events: Box<dyn ClientEvents>) -> Self {
        self.events = events;
        self
    }

    /// Current view state.
    #[must_use]
    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Current connection state.
    #[must_use]
    pub fn connection_state(&self) -> ConnectionState {
        self.connection
    }

    /// Run the client for the lifetime of the process.
    ///
    /// Renders the pre-populated snapshot, then connects and reconnects
    /// indefinitely. Never returns normally; callers wanting shutdown race
    /// this future against a signal.
    ///
    /// # Errors
    ///
    /// Returns an error only if the initial render fails. Later render
    /// failures and transport errors are logged and absorbed by the
    /// reconnect cycle.
    pub async fn run(&mut self) -> Result<(), ClientError> {
        self.renderer.render(&self.state.page)?;

        loop {
            if let Err(err) = self.connect_once().await {
                tracing::warn!(error = %err, "Connection attempt failed");
            }
            self.connection = ConnectionState::Disconnected;
            self.events.on_close();

            tracing::debug!(delay = ?self.options.reconnect_delay, "Reconnect scheduled");
            tokio::time::sleep(self.options.reconnect_delay).await;
        }
    }

    /// Open one connection and consume frames until it closes.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established. A close
    /// after a successful open is not an error.
    pub async fn connect_once(&mut self) -> Result<(), ClientError> {
        self.connection = ConnectionState::Connecting;
        let url = self.options.endpoint_url();
        tracing::debug!(url = %url, "Connecting");

        let (ws, _) = connect_async(url.as_str()).await?;
        self.connection = ConnectionState::Connected;
        tracing::info!(url = %url, "Connection established");
        self.events.on_open();

        self.drive(ws).await;
        tracing::info!("Connection closed");
        Ok(())
    }

    /// Consume frames from an established socket until it closes.
    async fn drive(&mut self, mut ws: WsStream) {
        while let Some(frame) = ws.next().await {
            match frame {
                Ok(Message::Text(text)) => self.handle_frame(&text),
                Ok(Message::Close(_)) => break,
                Ok(_) => {} // binary/ping/pong frames carry no snapshots
                Err(err) => {
                    tracing::debug!(error = %err, "Socket error, treating as close");
                    break;
                }
            }
        }
    }

    /// Apply one text frame: decode, overwrite state, re-render.
    ///
    /// Malformed frames are dropped without touching state or the sink.
    fn handle_frame(&mut self, text: &str) {
        tracing::debug!(len = text.len(), "Frame received");

        let msg = match ServerMessage::decode(text) {
            Ok(msg) => msg,
            Err(err) => {
                tracing::warn!(error = %err, "Malformed frame dropped");
                return;
            }
        };

        self.state.page = msg.page;
        if let Err(err) = self.renderer.render(&self.state.page) {
            tracing::warn!(error = %err, "Render failed");
        }
        self.events.on_message(&self.state.page);
    }

    /// Reconnect delay currently in effect.
    #[must_use]
    pub fn reconnect_delay(&self) -> Duration {
        self.options.reconnect_delay
    }
}
