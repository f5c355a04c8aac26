//! Client error types.

/// Live view client error.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The snapshot sink could not be written.
    #[error("Render error: {0}")]
    Render(#[from] std::io::Error),

    /// WebSocket transport failure.
    #[error("Transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),
}
