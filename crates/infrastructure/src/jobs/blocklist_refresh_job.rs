use ghost_dns_application::use_cases::ReloadBlocklistUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Background job that periodically rebuilds the blocklist from its sources.
pub struct BlocklistRefreshJob {
    reload: Arc<ReloadBlocklistUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl BlocklistRefreshJob {
    pub fn new(reload: Arc<ReloadBlocklistUseCase>, interval_secs: u64) -> Self {
        Self {
            reload,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Spawns the refresh loop. The first reload happens one interval after
    /// start; the initial load is the caller's job.
    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(interval_secs = self.interval_secs, "Starting blocklist refresh job");

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs.max(1));
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("BlocklistRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.reload.execute().await {
                            Ok(domains) => info!(domains, "Blocklist refresh completed"),
                            Err(e) => error!(error = %e, "Blocklist refresh failed, keeping current list"),
                        }
                    }
                }
            }
        })
    }
}
