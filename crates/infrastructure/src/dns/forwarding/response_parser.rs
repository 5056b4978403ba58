use ghost_dns_domain::DomainError;
use hickory_proto::op::Message;
use hickory_proto::rr::RData;
use tracing::debug;

/// What the forwarder needs to know about an upstream reply.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub answer_count: usize,
    pub ptr_names: Vec<String>,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Fails when the bytes do not decode as a DNS message.
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let mut ptr_names = Vec::new();
        for record in message.answers() {
            if let RData::PTR(ptr) = record.data() {
                ptr_names.push(ptr.to_utf8());
            }
        }

        debug!(
            answers = message.answers().len(),
            ptr_names = ptr_names.len(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            answer_count: message.answers().len(),
            ptr_names,
        })
    }
}
