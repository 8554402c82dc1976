//! Configuration loading and validation.
//!
//! Configuration is read once at startup into an immutable struct and
//! passed explicitly to the session; nothing re-reads the file later.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing or empty required field: {0}")]
    Missing(&'static str),
}

/// Bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server host name or address.
    pub server: String,
    /// Server port.
    pub port: u16,
    /// Nickname, also used as the registration realname.
    pub nick: String,
    /// Channels to join; the first is the bot's home channel, the
    /// target of its broadcasts.
    pub channels: Vec<String>,
    /// Path of the append-only audit log.
    #[serde(default = "default_audit_log")]
    pub audit_log: String,
}

fn default_audit_log() -> String {
    "octetbot.log".to_string()
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.is_empty() {
            return Err(ConfigError::Missing("server"));
        }
        if self.nick.is_empty() {
            return Err(ConfigError::Missing("nick"));
        }
        if self.channels.is_empty() || self.channels.iter().any(String::is_empty) {
            return Err(ConfigError::Missing("channels"));
        }
        Ok(())
    }

    /// The bot's home channel, the target of welcome and farewell
    /// broadcasts.
    pub fn home_channel(&self) -> &str {
        &self.channels[0]
    }
}
