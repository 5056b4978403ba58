use super::DnsServices;
use ghost_dns_application::use_cases::{
    GetActivitySnapshotUseCase, GetBlocklistSizeUseCase, ReloadBlocklistUseCase,
};
use ghost_dns_domain::Config;
use ghost_dns_infrastructure::blocklist::HostsListSource;
use std::sync::Arc;

pub struct UseCases {
    pub reload_blocklist: Arc<ReloadBlocklistUseCase>,
    pub get_activity: Arc<GetActivitySnapshotUseCase>,
    pub get_blocklist_size: Arc<GetBlocklistSizeUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, dns: &DnsServices) -> anyhow::Result<Self> {
        let source = Arc::new(HostsListSource::new()?);

        Ok(Self {
            reload_blocklist: Arc::new(ReloadBlocklistUseCase::new(
                source,
                dns.blocklist.clone(),
                config.blocking.clone(),
            )),
            get_activity: Arc::new(GetActivitySnapshotUseCase::new(
                dns.recorder.clone(),
                config.dashboard.recent_limit,
            )),
            get_blocklist_size: Arc::new(GetBlocklistSizeUseCase::new(dns.blocklist.clone())),
        })
    }
}
