//! Client configuration: CLI flags and a persisted config file
//!
//! The server URL comes from three layers: the built-in default, a JSON
//! config file in the platform config directory, and the `--server` CLI flag,
//! each overriding the previous. Load failures fall back to defaults with a
//! warning; a broken config file must never prevent the client from starting.

use bevy::prelude::*;
use clap::Parser;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Config filename inside the platform config directory
const CONFIG_FILENAME: &str = "config.json";

/// Command-line interface of the client binary
#[derive(Parser, Debug)]
#[command(name = "wirechess", about = "Client for a server-authoritative chess game")]
pub struct Cli {
    /// WebSocket URL of the game server, e.g. ws://127.0.0.1:8080
    #[arg(long)]
    pub server: Option<String>,
}

/// CLI values carried into the ECS for the config loader
#[derive(Resource, Debug, Default, Clone)]
pub struct CliOverrides {
    pub server: Option<String>,
}

/// Effective client configuration
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub server_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server_url: "ws://127.0.0.1:8080".to_owned(),
        }
    }
}

/// Resolve the config file path, falling back to the working directory
fn config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "wirechess", "wirechess") {
        proj_dirs.config_dir().join(CONFIG_FILENAME)
    } else {
        PathBuf::from(CONFIG_FILENAME)
    }
}

fn read_config(path: &Path) -> anyhow::Result<ClientConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading config at {path:?}"))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing config at {path:?}"))
}

/// Load the config file and apply CLI overrides
///
/// Runs in `PreStartup` so the transport finds [`ClientConfig`] in place when
/// it connects during `Startup`.
pub fn load_config_system(mut commands: Commands, overrides: Res<CliOverrides>) {
    let path = config_path();

    let mut config = if path.exists() {
        match read_config(&path) {
            Ok(config) => {
                info!("[CONFIG] loaded {path:?}");
                config
            }
            Err(err) => {
                warn!("[CONFIG] {err:#}; using defaults");
                ClientConfig::default()
            }
        }
    } else {
        info!("[CONFIG] no config file at {path:?}; using defaults");
        ClientConfig::default()
    };

    if let Some(server) = overrides.server.clone() {
        config.server_url = server;
    }

    info!("[CONFIG] game server: {}", config.server_url);
    commands.insert_resource(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_url() {
        let config = ClientConfig::default();
        assert_eq!(config.server_url, "ws://127.0.0.1:8080");
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = ClientConfig {
            server_url: "ws://chess.example.net:9001".to_owned(),
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let back: ClientConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.server_url, config.server_url);
    }

    #[test]
    fn test_garbage_config_is_an_error() {
        let dir = std::env::temp_dir().join("wirechess-config-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, "{ not json").unwrap();

        assert!(read_config(&path).is_err());
        fs::remove_file(&path).unwrap();
    }
}
