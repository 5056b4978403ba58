use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// The single upstream resolver every allowed query is forwarded to.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub address: String,

    pub port: u16,

    /// Per-query deadline for the upstream round trip.
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: "8.8.8.8".to_string(),
            port: 53,
            timeout_ms: 2000,
        }
    }
}

impl UpstreamConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.address.trim().parse().map_err(|_| {
            ConfigError::Validation(format!(
                "Upstream address '{}' is not an IP address",
                self.address
            ))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Accepts either `ip` or `ip:port` (`[v6]:port` for IPv6).
    pub fn set_from_str(&mut self, value: &str) -> Result<(), ConfigError> {
        if let Ok(addr) = value.parse::<SocketAddr>() {
            self.address = addr.ip().to_string();
            self.port = addr.port();
            return Ok(());
        }
        if value.parse::<IpAddr>().is_ok() {
            self.address = value.to_string();
            return Ok(());
        }
        Err(ConfigError::Validation(format!(
            "Invalid upstream '{}', expected ip or ip:port",
            value
        )))
    }
}
