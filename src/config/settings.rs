//! Application settings configuration
//!
//! Runtime knobs that do not belong on every command line, loaded from TOML.

use crate::certificate::ConnectTimeouts;
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default settings file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// SSL/TLS settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SslSettings {
    #[serde(default = "default_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_timeout")]
    pub handshake_timeout_secs: u64,
}

fn default_timeout() -> u64 {
    10
}

impl Default for SslSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_timeout(),
            handshake_timeout_secs: default_timeout(),
        }
    }
}

impl SslSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.handshake_timeout_secs)
    }

    pub fn timeouts(&self) -> ConnectTimeouts {
        ConnectTimeouts {
            connect: self.connect_timeout(),
            handshake: self.handshake_timeout(),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub ssl: SslSettings,
}

impl Settings {
    /// Load settings from `path`, or from the default config file when it
    /// exists, falling back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load_default(),
        }
    }

    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new(DEFAULT_CONFIG_PATH);
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Override both network timeouts
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.ssl.connect_timeout_secs = secs;
        self.ssl.handshake_timeout_secs = secs;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // A zero timeout means "block forever" for std sockets
        if self.ssl.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ssl.connect_timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.ssl.handshake_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ssl.handshake_timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
