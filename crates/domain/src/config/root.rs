use serde::{Deserialize, Serialize};
use std::path::Path;

use super::activity::ActivityConfig;
use super::blocking::BlockingConfig;
use super::clients::ClientsConfig;
use super::dashboard::DashboardConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "ghost-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ghost-dns/config.toml";

/// Main configuration structure for Ghost DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Listener ports and bind address
    pub server: ServerConfig,

    /// Upstream resolver for allowed queries
    pub upstream: UpstreamConfig,

    /// Gravity list sources and custom blocked domains
    pub blocking: BlockingConfig,

    /// Client device-name lookups
    pub clients: ClientsConfig,

    /// Live activity log
    pub activity: ActivityConfig,

    pub dashboard: DashboardConfig,

    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ghost-dns.toml in current directory
    /// 3. /etc/ghost-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides)?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) -> Result<(), ConfigError> {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(upstream) = overrides.upstream {
            self.upstream.set_from_str(&upstream)?;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        self.server.bind_ip()?;

        self.upstream.socket_addr()?;

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout must be greater than 0".to_string(),
            ));
        }

        if self.clients.reverse_lookup && self.clients.lookup_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Reverse lookup timeout must be greater than 0".to_string(),
            ));
        }

        if self.activity.capacity == 0 {
            return Err(ConfigError::Validation(
                "Activity log capacity must be greater than 0".to_string(),
            ));
        }

        if self.blocking.sinkhole_prefix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Sinkhole prefix cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream: Option<String>,
    pub log_level: Option<String>,
}
