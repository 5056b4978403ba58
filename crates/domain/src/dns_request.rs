use crate::{DomainError, ParsedQuery, RecordType};
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

/// Transport a query arrived on; the upstream is contacted over the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportProtocol {
    Udp,
    Tcp,
}

impl TransportProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Udp => "UDP",
            Self::Tcp => "TCP",
        }
    }
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct DnsRequest {
    /// Query name as it appeared on the wire (fully qualified, case preserved).
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub client_ip: IpAddr,
    pub protocol: TransportProtocol,
    /// Unmodified query bytes, forwarded upstream as-is.
    pub raw: Arc<[u8]>,
    pub query: ParsedQuery,
}

impl DnsRequest {
    pub fn from_wire(
        raw: impl Into<Arc<[u8]>>,
        client_ip: IpAddr,
        protocol: TransportProtocol,
    ) -> Result<Self, DomainError> {
        let raw = raw.into();
        let query = ParsedQuery::parse(&raw)?;
        Ok(Self {
            domain: Arc::from(query.name()),
            record_type: query.record_type(),
            client_ip,
            protocol,
            raw,
            query,
        })
    }

    /// Query name with a single trailing root separator removed.
    pub fn normalized_domain(&self) -> &str {
        normalize_domain(&self.domain)
    }
}

/// Strips one trailing `.`; case is left untouched.
pub fn normalize_domain(domain: &str) -> &str {
    domain.strip_suffix('.').unwrap_or(domain)
}
