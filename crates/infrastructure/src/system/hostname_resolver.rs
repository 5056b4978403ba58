use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use ghost_dns_application::ports::HostnameResolver;
use ghost_dns_domain::{DomainError, RecordType};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Names clients by asking a DNS server for the PTR record of their address.
pub struct PtrHostnameResolver {
    transport: UdpTransport,
    timeout: Duration,
}

impl PtrHostnameResolver {
    pub fn new(server: SocketAddr, timeout: Duration) -> Self {
        Self {
            transport: UdpTransport::new(server),
            timeout,
        }
    }

    pub fn ip_to_reverse_domain(ip: &IpAddr) -> String {
        match ip {
            IpAddr::V4(ipv4) => {
                let octets = ipv4.octets();
                format!(
                    "{}.{}.{}.{}.in-addr.arpa.",
                    octets[3], octets[2], octets[1], octets[0]
                )
            }
            IpAddr::V6(ipv6) => {
                let mut nibbles = Vec::with_capacity(32);
                for byte in ipv6.octets().iter().rev() {
                    nibbles.push(format!("{:x}", byte & 0x0f));
                    nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
                }
                format!("{}.ip6.arpa.", nibbles.join("."))
            }
        }
    }
}

#[async_trait]
impl HostnameResolver for PtrHostnameResolver {
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        let reverse_domain = Self::ip_to_reverse_domain(&ip);

        debug!(ip = %ip, reverse_domain = %reverse_domain, "Performing PTR lookup");

        let (_, query) = MessageBuilder::build_query(&reverse_domain, &RecordType::PTR)?;
        let response = self.transport.send(&query, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes)?;

        let hostname = parsed
            .ptr_names
            .into_iter()
            .map(|name| name.trim_end_matches('.').to_string())
            .find(|name| !name.is_empty());

        match &hostname {
            Some(name) => debug!(ip = %ip, hostname = %name, "PTR lookup successful"),
            None => debug!(ip = %ip, "PTR lookup returned no records"),
        }

        Ok(hostname)
    }
}

/// Used when reverse lookups are switched off; every client stays unnamed.
pub struct DisabledHostnameResolver;

#[async_trait]
impl HostnameResolver for DisabledHostnameResolver {
    async fn resolve_hostname(&self, _ip: IpAddr) -> Result<Option<String>, DomainError> {
        Ok(None)
    }
}
