use async_trait::async_trait;
use ghost_dns_domain::DomainError;

#[async_trait]
pub trait BlocklistSource: Send + Sync {
    /// Returns the raw hosts-format text found at `location`.
    async fn fetch(&self, location: &str) -> Result<String, DomainError>;
}
