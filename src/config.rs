use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Server configuration.
///
/// Carries everything a server instance needs: where to listen, which
/// directory `/files/*` paths are resolved against, and how long to wait
/// for a complete request before giving up on a connection. Constructed
/// once at startup and passed down explicitly, so tests can run several
/// independently configured instances side by side.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the TCP listener binds to (e.g. "127.0.0.1:4221").
    pub listen_addr: String,
    /// Base directory all `/files/*` names are resolved against.
    pub base_dir: PathBuf,
    /// Maximum seconds to wait for a complete request on a connection.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:4221".to_string(),
            base_dir: PathBuf::from("."),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// If `OUTPOST_CONFIG` points at a YAML file, the whole configuration is
    /// read from there. Otherwise `OUTPOST_LISTEN` and `OUTPOST_DIR` override
    /// the individual defaults.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = std::env::var("OUTPOST_CONFIG") {
            return Self::from_file(&path);
        }

        let mut cfg = Config::default();
        if let Ok(addr) = std::env::var("OUTPOST_LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Ok(dir) = std::env::var("OUTPOST_DIR") {
            cfg.base_dir = PathBuf::from(dir);
        }
        Ok(cfg)
    }

    /// Loads configuration from a YAML file.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path}"))?;
        serde_yaml::from_str(&raw).with_context(|| format!("invalid config file {path}"))
    }

    /// Read-phase timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
