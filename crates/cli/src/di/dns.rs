use ghost_dns_application::ports::{HostnameResolver, UpstreamForwarder};
use ghost_dns_application::services::{ActivityRecorder, DeviceNameCache};
use ghost_dns_application::use_cases::HandleDnsQueryUseCase;
use ghost_dns_domain::config::system_nameserver;
use ghost_dns_domain::Config;
use ghost_dns_infrastructure::blocklist::InMemoryBlocklist;
use ghost_dns_infrastructure::dns::DnsForwarder;
use ghost_dns_infrastructure::system::{DisabledHostnameResolver, PtrHostnameResolver};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub blocklist: Arc<InMemoryBlocklist>,
    pub recorder: Arc<ActivityRecorder>,
    pub handler: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let upstream = config.upstream.socket_addr()?;
        let forwarder: Arc<dyn UpstreamForwarder> = Arc::new(DnsForwarder::new(
            upstream,
            Duration::from_millis(config.upstream.timeout_ms),
        ));
        info!(upstream = %upstream, timeout_ms = config.upstream.timeout_ms, "Upstream configured");

        let hostname_resolver: Arc<dyn HostnameResolver> = if config.clients.reverse_lookup {
            let ptr_server = config
                .clients
                .ptr_server_addr(upstream, system_nameserver())?;
            info!(ptr_server = %ptr_server, "Reverse lookups enabled");
            Arc::new(PtrHostnameResolver::new(
                ptr_server,
                Duration::from_millis(config.clients.lookup_timeout_ms),
            ))
        } else {
            info!("Reverse lookups disabled");
            Arc::new(DisabledHostnameResolver)
        };

        let blocklist = Arc::new(InMemoryBlocklist::new());
        let recorder = Arc::new(ActivityRecorder::new(config.activity.capacity));
        let device_names = Arc::new(DeviceNameCache::new(hostname_resolver));

        let handler = Arc::new(HandleDnsQueryUseCase::new(
            blocklist.clone(),
            forwarder,
            device_names,
            recorder.clone(),
        ));

        Ok(Self {
            blocklist,
            recorder,
            handler,
        })
    }
}
