//! Configuration management for the live view client.
//!
//! Parses `liveview.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override TLS flag (`wss://` instead of `ws://`).
    pub tls: Option<bool>,
    /// Override page identifier.
    pub page_id: Option<String>,
    /// Override reconnect delay in milliseconds.
    pub reconnect_delay_ms: Option<u64>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "liveview.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server endpoint configuration.
    pub server: ServerConfig,
    /// Client behaviour configuration.
    pub client: ClientConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            client: ClientConfig::default(),
            config_path: None,
        }
    }
}

/// Server endpoint configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Use `wss://` instead of `ws://`.
    pub tls: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            tls: false,
        }
    }
}

/// Client behaviour configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Page identifier to subscribe to.
    pub page_id: String,
    /// Delay between a disconnect and the next connection attempt.
    pub reconnect_delay_ms: u64,
    /// Snapshot rendered before the first server frame arrives.
    pub initial_page: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            page_id: "index".to_owned(),
            reconnect_delay_ms: 5000,
            initial_page: String::new(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `liveview.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(tls) = settings.tls {
            self.server.tls = tls;
        }
        if let Some(page_id) = &settings.page_id {
            self.client.page_id.clone_from(page_id);
        }
        if let Some(delay) = settings.reconnect_delay_ms {
            self.client.reconnect_delay_ms = delay;
        }
    }

    /// Validate the loaded configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation(
                "server.host cannot be empty".into(),
            ));
        }
        if self.client.page_id.is_empty() {
            return Err(ConfigError::Validation(
                "client.page_id cannot be empty".into(),
            ));
        }
        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert!(!config.server.tls);
        assert_eq!(config.client.page_id, "index");
        assert_eq!(config.client.reconnect_delay_ms, 5000);
        assert_eq!(config.client.initial_page, "");
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
    }

    #[test]
    fn test_parse_server_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000
tls = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert!(config.server.tls);
    }

    #[test]
    fn test_parse_client_config() {
        let toml = r#"
[client]
page_id = "notes/today"
reconnect_delay_ms = 250
initial_page = "<p>loading</p>"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.client.page_id, "notes/today");
        assert_eq!(config.client.reconnect_delay_ms, 250);
        assert_eq!(config.client.initial_page, "<p>loading</p>");
    }

    #[test]
    fn test_cli_settings_override() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            host: Some("example.com".to_owned()),
            port: Some(443),
            tls: Some(true),
            page_id: Some("guide".to_owned()),
            reconnect_delay_ms: Some(1000),
        });

        assert_eq!(config.server.host, "example.com");
        assert_eq!(config.server.port, 443);
        assert!(config.server.tls);
        assert_eq!(config.client.page_id, "guide");
        assert_eq!(config.client.reconnect_delay_ms, 1000);
    }

    #[test]
    fn test_cli_settings_partial_override() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            port: Some(8080),
            ..CliSettings::default()
        });

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.client.page_id, "index");
    }

    #[test]
    fn test_validate_empty_page_id() {
        let mut config = Config::default();
        config.client.page_id = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let result = Config::load(Some(Path::new("/nonexistent/liveview.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("liveview.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 8123

[client]
page_id = "demo"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.client.page_id, "demo");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("liveview.toml");
        std::fs::write(&path, "[server\nhost = ").unwrap();

        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
