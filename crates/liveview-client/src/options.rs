//! Client options.

use std::time::Duration;

/// Options for a [`LiveViewClient`](crate::LiveViewClient).
#[derive(Clone, Debug)]
pub struct ClientOptions {
    /// Server host.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Use `wss://` instead of `ws://`.
    pub tls: bool,
    /// Page identifier to subscribe to.
    pub page_id: String,
    /// Delay between a close and the next connection attempt.
    pub reconnect_delay: Duration,
    /// Snapshot rendered before the first frame arrives.
    pub initial_page: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            tls: false,
            page_id: "index".to_owned(),
            reconnect_delay: Duration::from_millis(5000),
            initial_page: String::new(),
        }
    }
}

impl ClientOptions {
    /// WebSocket endpoint URL, `ws(s)://<host>:<port>/api/<page_id>`.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        let scheme = if self.tls { "wss" } else { "ws" };
        format!(
            "{scheme}://{}:{}/api/{}",
            self.host, self.port, self.page_id
        )
    }
}

/// Build client options from loaded configuration.
#[must_use]
pub fn options_from_config(config: &liveview_config::Config) -> ClientOptions {
    ClientOptions {
        host: config.server.host.clone(),
        port: config.server.port,
        tls: config.server.tls,
        page_id: config.client.page_id.clone(),
        reconnect_delay: Duration::from_millis(config.client.reconnect_delay_ms),
        initial_page: config.client.initial_page.clone(),
    }
}
