//! `liveview watch` command implementation.

use std::path::PathBuf;

use clap::Args;
use liveview_client::{options_from_config, FileRenderer, LiveViewClient, Render};
use liveview_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;
use crate::render::TerminalRenderer;

/// Arguments for the watch command.
#[derive(Args)]
pub(crate) struct WatchArgs {
    /// Path to configuration file (default: auto-discover liveview.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server host (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Server port (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Connect with wss:// instead of ws:// (overrides config).
    #[arg(long)]
    tls: bool,

    /// Page identifier to subscribe to (overrides config).
    #[arg(long)]
    page_id: Option<String>,

    /// Delay in milliseconds before reconnecting after a disconnect.
    #[arg(long)]
    reconnect_delay_ms: Option<u64>,

    /// Write snapshots to a file instead of the terminal.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (show connection and frame logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl WatchArgs {
    /// Execute the watch command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the initial render fails.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            tls: self.tls.then_some(true),
            page_id: self.page_id,
            reconnect_delay_ms: self.reconnect_delay_ms,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let options = options_from_config(&config);

        // Print startup info
        output.info(&format!("Endpoint: {}", options.endpoint_url()));
        output.info(&format!(
            "Reconnect delay: {}ms",
            options.reconnect_delay.as_millis()
        ));
        match &self.output {
            Some(path) => output.info(&format!("Rendering to: {}", path.display())),
            None => output.info("Rendering to: terminal"),
        }

        // Build renderer and run the client until Ctrl-C
        let renderer: Box<dyn Render> = match self.output {
            Some(path) => Box::new(FileRenderer::new(path)),
            None => Box::new(TerminalRenderer::new()),
        };
        let mut client = LiveViewClient::new(options, renderer);

        tokio::select! {
            result = client.run() => result?,
            () = shutdown_signal() => {
                output.success("Stopped");
            }
        }

        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping client...");
}
