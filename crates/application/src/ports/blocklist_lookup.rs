use rustc_hash::FxHashSet;

/// Read side of the blocklist used on every query.
pub trait BlocklistLookup: Send + Sync {
    /// Exact, case-sensitive membership test.
    fn contains(&self, domain: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Installs a freshly built blocklist in one step; lookups in flight keep
/// seeing the previous set until the swap.
pub trait BlocklistWriter: Send + Sync {
    fn replace(&self, domains: FxHashSet<String>);
}
