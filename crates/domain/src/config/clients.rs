use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// systemd-resolved keeps the real nameservers here; `/etc/resolv.conf` then
/// only lists its stub listener.
const RESOLV_CONF_PATHS: [&str; 2] = ["/run/systemd/resolve/resolv.conf", "/etc/resolv.conf"];

/// Reverse lookups used to put a device name next to each client address.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientsConfig {
    pub reverse_lookup: bool,

    pub lookup_timeout_ms: u64,

    /// Server asked for PTR records. When unset, the system's nameserver is
    /// used, then the upstream.
    pub ptr_server: Option<String>,
}

impl Default for ClientsConfig {
    fn default() -> Self {
        Self {
            reverse_lookup: true,
            lookup_timeout_ms: 2000,
            ptr_server: None,
        }
    }
}

impl ClientsConfig {
    pub fn ptr_server_addr(
        &self,
        upstream: SocketAddr,
        system_nameserver: Option<IpAddr>,
    ) -> Result<SocketAddr, ConfigError> {
        let Some(server) = self.ptr_server.as_deref() else {
            return Ok(system_nameserver
                .map(|ip| SocketAddr::new(ip, 53))
                .unwrap_or(upstream));
        };
        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Ok(addr);
        }
        server
            .parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, 53))
            .map_err(|_| ConfigError::Validation(format!("Invalid PTR server '{}'", server)))
    }
}

/// First usable nameserver configured for this host, usually the LAN router.
pub fn system_nameserver() -> Option<IpAddr> {
    RESOLV_CONF_PATHS
        .iter()
        .filter_map(|path| std::fs::read_to_string(path).ok())
        .find_map(|contents| nameserver_from_resolv_conf(&contents))
}

/// Loopback entries are skipped since they may point back at this server.
pub fn nameserver_from_resolv_conf(contents: &str) -> Option<IpAddr> {
    contents
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match fields.next() {
                Some("nameserver") => fields.next(),
                _ => None,
            }
        })
        .filter_map(|addr| addr.parse::<IpAddr>().ok())
        .find(|ip| !ip.is_loopback())
}
