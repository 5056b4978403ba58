use async_trait::async_trait;
use ghost_dns_application::ports::BlocklistSource;
use ghost_dns_domain::DomainError;
use std::time::Duration;
use tracing::debug;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads hosts-format lists from `http(s)://` URLs or local files.
pub struct HostsListSource {
    http_client: reqwest::Client,
}

impl HostsListSource {
    pub fn new() -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("ghost-dns/", env!("CARGO_PKG_VERSION"), " (blocklist-sync)"))
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| DomainError::BlocklistFetchError(e.to_string()))?;
        Ok(Self { http_client })
    }

    fn is_url(location: &str) -> bool {
        location.starts_with("http://") || location.starts_with("https://")
    }

    async fn fetch_url(&self, url: &str) -> Result<String, DomainError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::BlocklistFetchError(format!("fetch error for {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::BlocklistFetchError(format!(
                "HTTP {} for {}",
                response.status().as_u16(),
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| DomainError::BlocklistFetchError(format!("read error for {url}: {e}")))
    }

    async fn fetch_file(path: &str) -> Result<String, DomainError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::BlocklistFetchError(format!("{path}: {e}")))
    }
}

#[async_trait]
impl BlocklistSource for HostsListSource {
    async fn fetch(&self, location: &str) -> Result<String, DomainError> {
        debug!(source = %location, "Fetching blocklist");
        if Self::is_url(location) {
            self.fetch_url(location).await
        } else {
            Self::fetch_file(location).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_detection() {
        assert!(HostsListSource::is_url("https://example.com/hosts"));
        assert!(HostsListSource::is_url("http://example.com/hosts"));
        assert!(!HostsListSource::is_url("/etc/ghost-dns/hosts"));
        assert!(!HostsListSource::is_url("hosts.txt"));
    }
}
