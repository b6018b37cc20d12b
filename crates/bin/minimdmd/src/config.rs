//! Configuration loading from a TOML file with environment variable overrides.
//!
//! Looks for `minimdm.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables win over file
//! values.

use minimdm_domain::device::{Device, ProfileStatus};
use minimdm_domain::error::MdmError;
use serde::Deserialize;

const CONFIG_FILE: &str = "minimdm.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Device enrollment program settings.
    pub dep: DepConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Virtual DEP account configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DepConfig {
    /// Serve the built-in demo devices.
    pub virtual_enabled: bool,
    /// Extra devices served by the account, after the demo set.
    pub devices: Vec<DeviceSeed>,
}

/// A device declared in the configuration file.
#[derive(Debug, Deserialize)]
pub struct DeviceSeed {
    pub serial_number: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub asset_tag: Option<String>,
    #[serde(default)]
    pub profile_status: ProfileStatus,
}

impl Config {
    /// Load configuration from `minimdm.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`. `MINIMDM_BIND` wins over the
    /// host/port pair and `RUST_LOG` wins over `MINIMDM_LOG`.
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup("MINIMDM_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("MINIMDM_PORT") {
            self.server.port = parse_port("MINIMDM_PORT", &port)?;
        }
        if let Some(bind) = lookup("MINIMDM_BIND") {
            let (host, port) = bind.rsplit_once(':').ok_or_else(|| {
                ConfigError::Validation(format!("MINIMDM_BIND {bind:?} is not host:port"))
            })?;
            self.server.port = parse_port("MINIMDM_BIND", port)?;
            self.server.host = host.to_string();
        }
        if let Some(url) = lookup("MINIMDM_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(filter) = lookup("RUST_LOG").or_else(|| lookup("MINIMDM_LOG")) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database url must not be empty".to_string(),
            ));
        }
        if let Some(index) = self
            .dep
            .devices
            .iter()
            .position(|seed| seed.serial_number.trim().is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "dep device #{index} has an empty serial number"
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

fn parse_port(variable: &str, value: &str) -> Result<u16, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{variable} has invalid port {value:?}")))
}

impl DepConfig {
    /// Turn the configured seeds into domain devices.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Device`] if a seed does not describe a valid device.
    pub fn seeded_devices(&self) -> Result<Vec<Device>, ConfigError> {
        self.devices
            .iter()
            .map(DeviceSeed::to_device)
            .collect::<Result<Vec<_>, _>>()
            .map_err(ConfigError::Device)
    }
}

impl DeviceSeed {
    fn to_device(&self) -> Result<Device, MdmError> {
        let mut builder = Device::builder()
            .serial_number(&self.serial_number)
            .profile_status(self.profile_status);
        if let Some(model) = &self.model {
            builder = builder.model(model);
        }
        if let Some(description) = &self.description {
            builder = builder.description(description);
        }
        if let Some(color) = &self.color {
            builder = builder.color(color);
        }
        if let Some(asset_tag) = &self.asset_tag {
            builder = builder.asset_tag(asset_tag);
        }
        builder.build()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:minimdm.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "minimdmd=info,minimdm=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for DepConfig {
    fn default() -> Self {
        Self {
            virtual_enabled: true,
            devices: Vec::new(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// A seeded device was rejected by the domain.
    #[error("invalid seeded device")]
    Device(#[source] MdmError),
}
