use super::response_parser::ResponseParser;
use crate::dns::transport::tcp::TcpTransport;
use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use bytes::Bytes;
use ghost_dns_application::ports::{UpstreamForwarder, UpstreamReply};
use ghost_dns_domain::dns_wire::{response_code, ResponseCode};
use ghost_dns_domain::{DomainError, TransportProtocol};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Forwards client queries verbatim to the one configured upstream.
///
/// Each query gets exactly one attempt over the transport it arrived on. The
/// reply must decode as a DNS message to be passed back.
pub struct DnsForwarder {
    upstream: SocketAddr,
    udp: UdpTransport,
    tcp: TcpTransport,
    timeout: Duration,
}

impl DnsForwarder {
    pub fn new(upstream: SocketAddr, timeout: Duration) -> Self {
        Self {
            upstream,
            udp: UdpTransport::new(upstream),
            tcp: TcpTransport::new(upstream),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn transport(&self, protocol: TransportProtocol) -> &dyn DnsTransport {
        match protocol {
            TransportProtocol::Udp => &self.udp,
            TransportProtocol::Tcp => &self.tcp,
        }
    }
}

#[async_trait]
impl UpstreamForwarder for DnsForwarder {
    async fn forward(
        &self,
        raw_query: &[u8],
        protocol: TransportProtocol,
    ) -> Result<UpstreamReply, DomainError> {
        let response = self
            .transport(protocol)
            .send(raw_query, self.timeout)
            .await?;

        let parsed = ResponseParser::parse(&response.bytes)?;
        let rcode = response_code(&response.bytes).unwrap_or_default();

        debug!(
            upstream = %self.upstream,
            protocol = %response.protocol_used,
            rcode = ResponseCode::from_code(rcode).map_or("OTHER", |code| code.as_str()),
            answers = parsed.answer_count,
            "Upstream replied"
        );

        Ok(UpstreamReply {
            bytes: Bytes::from(response.bytes),
            rcode,
            answer_count: parsed.answer_count,
        })
    }

    fn upstream_name(&self) -> String {
        self.upstream.to_string()
    }
}
