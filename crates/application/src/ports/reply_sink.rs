use async_trait::async_trait;
use ghost_dns_domain::DomainError;

/// Puts a finished reply on the wire for the client that asked.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_reply(&self, reply: &[u8]) -> Result<(), DomainError>;
}
