pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use ghost_dns_domain::{DomainError, TransportProtocol};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
    pub protocol_used: TransportProtocol,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends one message and waits for its reply, all within `timeout`.
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol(&self) -> TransportProtocol;
}

pub(crate) fn map_io_error(error: io::Error, server: SocketAddr) -> DomainError {
    match error.kind() {
        io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
            server: server.to_string(),
        },
        io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted => {
            DomainError::TransportConnectionReset {
                server: server.to_string(),
            }
        }
        io::ErrorKind::TimedOut => DomainError::QueryTimeout,
        _ => DomainError::IoError(format!("{server}: {error}")),
    }
}
