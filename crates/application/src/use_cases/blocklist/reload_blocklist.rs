use crate::ports::{BlocklistSource, BlocklistWriter};
use ghost_dns_domain::{parse_hosts, BlockingConfig, DomainError};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct ReloadBlocklistUseCase {
    source: Arc<dyn BlocklistSource>,
    writer: Arc<dyn BlocklistWriter>,
    config: BlockingConfig,
}

impl ReloadBlocklistUseCase {
    pub fn new(
        source: Arc<dyn BlocklistSource>,
        writer: Arc<dyn BlocklistWriter>,
        config: BlockingConfig,
    ) -> Self {
        Self {
            source,
            writer,
            config,
        }
    }

    /// Rebuilds the blocklist from every source plus the custom domains and
    /// installs it in one swap. Returns the number of installed domains.
    ///
    /// Failed sources are skipped. When sources are configured and none of
    /// them load, the installed set is left untouched.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let mut domains = FxHashSet::default();
        let mut loaded = 0usize;

        for location in &self.config.sources {
            match self.source.fetch(location).await {
                Ok(text) => {
                    let before = domains.len();
                    domains.extend(parse_hosts(&text, &self.config.sinkhole_prefix));
                    loaded += 1;
                    info!(
                        source = %location,
                        added = domains.len() - before,
                        "Blocklist source loaded"
                    );
                }
                Err(e) => {
                    warn!(source = %location, error = %e, "Failed to load blocklist source");
                }
            }
        }

        if !self.config.sources.is_empty() && loaded == 0 {
            return Err(DomainError::BlocklistFetchError(format!(
                "none of {} source(s) could be loaded",
                self.config.sources.len()
            )));
        }

        domains.extend(self.config.custom_blocked.iter().cloned());

        let total = domains.len();
        self.writer.replace(domains);
        info!(domains = total, sources = loaded, "Blocklist installed");
        Ok(total)
    }
}
