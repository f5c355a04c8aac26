//! WebSocket live view client.
//!
//! Maintains a WebSocket connection to a live view server, receives
//! full-page HTML snapshots as JSON text frames, re-renders the page on
//! each update, and reconnects after a fixed delay on every disconnect.
//!
//! # Quick Start
//!
//! ```ignore
//! use liveview_client::{ClientOptions, FileRenderer, LiveViewClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let options = ClientOptions {
//!         host: "127.0.0.1".to_string(),
//!         port: 7979,
//!         ..ClientOptions::default()
//!     };
//!
//!     let renderer = FileRenderer::new("preview.html");
//!     let mut client = LiveViewClient::new(options, Box::new(renderer));
//!     client.run().await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Server ──ws(s)://host/api/<page_id>──► LiveViewClient
//!                                             │
//!                                             ├─► ClientState  (current snapshot)
//!                                             │
//!                                             ├─► Render       (snapshot sink)
//!                                             │
//!                                             └─► ClientEvents (open/message/close hooks)
//! ```

mod client;
mod error;
mod events;
mod options;
mod protocol;
mod render;
mod state;

pub use client::LiveViewClient;
pub use error::ClientError;
pub use events::ClientEvents;
pub use options::{options_from_config, ClientOptions};
pub use protocol::ServerMessage;
pub use render::{FileRenderer, Render};
pub use state::{ClientState, ConnectionState};
