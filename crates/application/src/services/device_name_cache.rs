use crate::ports::HostnameResolver;
use dashmap::DashMap;
use ghost_dns_domain::UNKNOWN_DEVICE;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Client address to display name, filled lazily by reverse lookup.
///
/// Failed or empty lookups cache [`UNKNOWN_DEVICE`] and are never retried.
/// The lookup runs without holding any map lock, so two concurrent misses for
/// the same address may both resolve; the last insert wins.
pub struct DeviceNameCache {
    resolver: Arc<dyn HostnameResolver>,
    names: DashMap<IpAddr, Arc<str>>,
}

impl DeviceNameCache {
    pub fn new(resolver: Arc<dyn HostnameResolver>) -> Self {
        Self {
            resolver,
            names: DashMap::new(),
        }
    }

    pub async fn resolve(&self, ip: IpAddr) -> Arc<str> {
        if let Some(name) = self.get(&ip) {
            return name;
        }

        let name: Arc<str> = match self.resolver.resolve_hostname(ip).await {
            Ok(Some(hostname)) if !hostname.is_empty() => Arc::from(hostname),
            Ok(_) => {
                debug!(client = %ip, "No PTR record for client");
                Arc::from(UNKNOWN_DEVICE)
            }
            Err(e) => {
                debug!(client = %ip, error = %e, "Reverse lookup failed");
                Arc::from(UNKNOWN_DEVICE)
            }
        };

        self.names.insert(ip, Arc::clone(&name));
        name
    }

    pub fn get(&self, ip: &IpAddr) -> Option<Arc<str>> {
        self.names.get(ip).map(|entry| Arc::clone(entry.value()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
