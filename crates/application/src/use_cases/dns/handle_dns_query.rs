use crate::ports::{BlocklistLookup, ReplySink, UpstreamForwarder};
use crate::services::{ActivityRecorder, DeviceNameCache};
use bytes::Bytes;
use ghost_dns_domain::{
    ActivityRecord, DnsRequest, QueryStatus, ResponseCode, SINKHOLE_ADDR, SINKHOLE_TTL,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Outcome of one query: the bytes sent to the client and how it was decided.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub reply: Bytes,
    pub status: QueryStatus,
}

pub struct HandleDnsQueryUseCase {
    blocklist: Arc<dyn BlocklistLookup>,
    forwarder: Arc<dyn UpstreamForwarder>,
    device_names: Arc<DeviceNameCache>,
    recorder: Arc<ActivityRecorder>,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        blocklist: Arc<dyn BlocklistLookup>,
        forwarder: Arc<dyn UpstreamForwarder>,
        device_names: Arc<DeviceNameCache>,
        recorder: Arc<ActivityRecorder>,
    ) -> Self {
        Self {
            blocklist,
            forwarder,
            device_names,
            recorder,
        }
    }

    /// Resolves one query and records it.
    ///
    /// The reply is handed to `sink` before the client name is looked up and
    /// the record committed, so enrichment never delays the answer. Upstream
    /// failures become SERVFAIL and are never returned as errors.
    #[instrument(skip(self, request, sink), fields(domain = %request.domain, client = %request.client_ip))]
    pub async fn execute(&self, request: &DnsRequest, sink: &dyn ReplySink) -> Resolution {
        let start = Instant::now();
        let domain = request.normalized_domain();

        let (reply, status) = if self.blocklist.contains(domain) {
            info!(record_type = %request.record_type, "Blocked");
            (
                Bytes::from(request.query.sinkhole_response(SINKHOLE_ADDR, SINKHOLE_TTL)),
                QueryStatus::Blocked,
            )
        } else {
            match self.forwarder.forward(&request.raw, request.protocol).await {
                Ok(upstream) => {
                    debug!(
                        rcode = upstream.rcode,
                        answers = upstream.answer_count,
                        "Forwarded"
                    );
                    (upstream.bytes, QueryStatus::Allowed)
                }
                Err(e) => {
                    warn!(
                        upstream = %self.forwarder.upstream_name(),
                        error = %e,
                        "Upstream failed, answering SERVFAIL"
                    );
                    (
                        Bytes::from(request.query.error_response(ResponseCode::ServFail)),
                        QueryStatus::Error,
                    )
                }
            }
        };

        if let Err(e) = sink.send_reply(&reply).await {
            warn!(error = %e, "Failed to send reply");
        }

        let client_name = self.device_names.resolve(request.client_ip).await;
        self.recorder.commit(ActivityRecord::new(
            request.client_ip,
            client_name,
            domain,
            status,
        ));

        debug!(
            status = %status,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Query handled"
        );

        Resolution { reply, status }
    }
}
