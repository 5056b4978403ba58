use async_trait::async_trait;
use bytes::Bytes;
use ghost_dns_domain::{DomainError, TransportProtocol};

/// Reply received from the upstream, kept byte-for-byte.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub bytes: Bytes,
    pub rcode: u8,
    pub answer_count: usize,
}

#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Single attempt, bounded by the forwarder's timeout. No retries.
    async fn forward(
        &self,
        raw_query: &[u8],
        protocol: TransportProtocol,
    ) -> Result<UpstreamReply, DomainError>;

    fn upstream_name(&self) -> String;
}
