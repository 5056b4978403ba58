use arc_swap::ArcSwap;
use ghost_dns_application::ports::{BlocklistLookup, BlocklistWriter};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Blocked names held as one immutable set, swapped whole on reload.
pub struct InMemoryBlocklist {
    domains: ArcSwap<FxHashSet<String>>,
}

impl InMemoryBlocklist {
    pub fn new() -> Self {
        Self {
            domains: ArcSwap::from_pointee(FxHashSet::default()),
        }
    }

    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: FxHashSet<String> = domains.into_iter().map(Into::into).collect();
        Self {
            domains: ArcSwap::from_pointee(set),
        }
    }
}

impl Default for InMemoryBlocklist {
    fn default() -> Self {
        Self::new()
    }
}

impl BlocklistLookup for InMemoryBlocklist {
    fn contains(&self, domain: &str) -> bool {
        self.domains.load().contains(domain)
    }

    fn len(&self) -> usize {
        self.domains.load().len()
    }
}

impl BlocklistWriter for InMemoryBlocklist {
    fn replace(&self, domains: FxHashSet<String>) {
        self.domains.store(Arc::new(domains));
    }
}
