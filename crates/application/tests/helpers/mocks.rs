#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use ghost_dns_application::ports::{
    BlocklistLookup, BlocklistSource, BlocklistWriter, HostnameResolver, ReplySink,
    UpstreamForwarder, UpstreamReply,
};
use ghost_dns_domain::{DomainError, TransportProtocol};
use rustc_hash::FxHashSet;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

#[derive(Clone, Default)]
pub struct MockBlocklist {
    domains: Arc<RwLock<FxHashSet<String>>>,
}

impl MockBlocklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domains(domains: &[&str]) -> Self {
        let mock = Self::new();
        for domain in domains {
            mock.add(domain);
        }
        mock
    }

    pub fn add(&self, domain: &str) {
        self.domains.write().unwrap().insert(domain.to_string());
    }

    pub fn domains(&self) -> FxHashSet<String> {
        self.domains.read().unwrap().clone()
    }
}

impl BlocklistLookup for MockBlocklist {
    fn contains(&self, domain: &str) -> bool {
        self.domains.read().unwrap().contains(domain)
    }

    fn len(&self) -> usize {
        self.domains.read().unwrap().len()
    }
}

impl BlocklistWriter for MockBlocklist {
    fn replace(&self, domains: FxHashSet<String>) {
        *self.domains.write().unwrap() = domains;
    }
}

/// Echoes the query back with QR set and a fixed answer count, or fails.
#[derive(Clone)]
pub struct MockUpstreamForwarder {
    calls: Arc<AtomicUsize>,
    failure: Arc<RwLock<Option<DomainError>>>,
    delay: Option<Duration>,
    last_protocol: Arc<RwLock<Option<TransportProtocol>>>,
}

impl MockUpstreamForwarder {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            failure: Arc::new(RwLock::new(None)),
            delay: None,
            last_protocol: Arc::new(RwLock::new(None)),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        let mock = Self::new();
        mock.set_failure(Some(error));
        mock
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_failure(&self, error: Option<DomainError>) {
        *self.failure.write().unwrap() = error;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_protocol(&self) -> Option<TransportProtocol> {
        *self.last_protocol.read().unwrap()
    }

    /// Bytes the mock answers with for `query`.
    pub fn reply_for(query: &[u8]) -> Vec<u8> {
        let mut reply = query.to_vec();
        reply[2] |= 0x80;
        reply[3] = 0x80;
        reply
    }
}

#[async_trait]
impl UpstreamForwarder for MockUpstreamForwarder {
    async fn forward(
        &self,
        raw_query: &[u8],
        protocol: TransportProtocol,
    ) -> Result<UpstreamReply, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_protocol.write().unwrap() = Some(protocol);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.failure.read().unwrap().clone() {
            return Err(error);
        }

        Ok(UpstreamReply {
            bytes: Bytes::from(Self::reply_for(raw_query)),
            rcode: 0,
            answer_count: 0,
        })
    }

    fn upstream_name(&self) -> String {
        "mock:53".to_string()
    }
}

#[derive(Clone, Default)]
pub struct MockHostnameResolver {
    names: Arc<RwLock<HashMap<IpAddr, String>>>,
    failing: Arc<RwLock<Vec<IpAddr>>>,
    calls: Arc<AtomicUsize>,
}

impl MockHostnameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(self, ip: IpAddr, name: &str) -> Self {
        self.names.write().unwrap().insert(ip, name.to_string());
        self
    }

    pub fn failing_for(self, ip: IpAddr) -> Self {
        self.failing.write().unwrap().push(ip);
        self
    }

    pub fn set_name(&self, ip: IpAddr, name: &str) {
        self.names.write().unwrap().insert(ip, name.to_string());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostnameResolver for MockHostnameResolver {
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.read().unwrap().contains(&ip) {
            return Err(DomainError::QueryTimeout);
        }
        Ok(self.names.read().unwrap().get(&ip).cloned())
    }
}

#[derive(Clone, Default)]
pub struct CapturingReplySink {
    replies: Arc<RwLock<Vec<Vec<u8>>>>,
    fail: bool,
}

impl CapturingReplySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn replies(&self) -> Vec<Vec<u8>> {
        self.replies.read().unwrap().clone()
    }
}

#[async_trait]
impl ReplySink for CapturingReplySink {
    async fn send_reply(&self, reply: &[u8]) -> Result<(), DomainError> {
        self.replies.write().unwrap().push(reply.to_vec());
        if self.fail {
            return Err(DomainError::IoError("client went away".to_string()));
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockBlocklistSource {
    contents: Arc<RwLock<HashMap<String, String>>>,
}

impl MockBlocklistSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, location: &str, text: &str) -> Self {
        self.set_list(location, text);
        self
    }

    pub fn set_list(&self, location: &str, text: &str) {
        self.contents
            .write()
            .unwrap()
            .insert(location.to_string(), text.to_string());
    }
}

#[async_trait]
impl BlocklistSource for MockBlocklistSource {
    async fn fetch(&self, location: &str) -> Result<String, DomainError> {
        self.contents
            .read()
            .unwrap()
            .get(location)
            .cloned()
            .ok_or_else(|| DomainError::BlocklistFetchError(format!("{location}: not found")))
    }
}
