use async_trait::async_trait;
use ghost_dns_application::ports::ReplySink;
use ghost_dns_application::use_cases::HandleDnsQueryUseCase;
use ghost_dns_domain::dns_wire::header_only_response;
use ghost_dns_domain::{DnsRequest, DomainError, ResponseCode, TransportProtocol};
use ghost_dns_infrastructure::dns::transport::tcp::{
    read_with_length_prefix, send_with_length_prefix,
};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const UDP_RECV_BUFFER: usize = 4096;
const TCP_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: Arc<HandleDnsQueryUseCase>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let domain = if bind_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let udp_socket = Arc::new(create_udp_socket(domain, bind_addr)?);
    let tcp_listener = create_tcp_listener(domain, bind_addr)?;

    info!(bind_address = %bind_addr, "DNS server listening on UDP and TCP");

    let udp = tokio::spawn(run_udp(udp_socket, handler.clone(), shutdown.clone()));
    let tcp = tokio::spawn(run_tcp(tcp_listener, handler, shutdown));

    let _ = tokio::join!(udp, tcp);
    info!("DNS server stopped");
    Ok(())
}

struct UdpReplySink {
    socket: Arc<UdpSocket>,
    peer: SocketAddr,
}

#[async_trait]
impl ReplySink for UdpReplySink {
    async fn send_reply(&self, reply: &[u8]) -> Result<(), DomainError> {
        self.socket
            .send_to(reply, self.peer)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::IoError(e.to_string()))
    }
}

struct TcpReplySink {
    writer: Arc<Mutex<OwnedWriteHalf>>,
}

#[async_trait]
impl ReplySink for TcpReplySink {
    async fn send_reply(&self, reply: &[u8]) -> Result<(), DomainError> {
        let mut writer = self.writer.lock().await;
        send_with_length_prefix(&mut *writer, reply)
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))
    }
}

async fn run_udp(
    socket: Arc<UdpSocket>,
    handler: Arc<HandleDnsQueryUseCase>,
    shutdown: CancellationToken,
) {
    let mut recv_buf = vec![0u8; UDP_RECV_BUFFER];

    loop {
        let (len, peer) = tokio::select! {
            _ = shutdown.cancelled() => break,
            received = socket.recv_from(&mut recv_buf) => match received {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "UDP recv error");
                    continue;
                }
            },
        };

        let raw = recv_buf[..len].to_vec();
        let sink = UdpReplySink {
            socket: socket.clone(),
            peer,
        };
        let handler = handler.clone();
        tokio::spawn(async move {
            handle_message(&handler, raw, peer, TransportProtocol::Udp, &sink).await;
        });
    }
}

async fn run_tcp(
    listener: TcpListener,
    handler: Arc<HandleDnsQueryUseCase>,
    shutdown: CancellationToken,
) {
    loop {
        let (stream, peer) = tokio::select! {
            _ = shutdown.cancelled() => break,
            accepted = listener.accept() => match accepted {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!(error = %e, "TCP accept error");
                    continue;
                }
            },
        };

        let handler = handler.clone();
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            serve_tcp_connection(stream, peer, handler, shutdown).await;
        });
    }
}

async fn serve_tcp_connection(
    stream: TcpStream,
    peer: SocketAddr,
    handler: Arc<HandleDnsQueryUseCase>,
    shutdown: CancellationToken,
) {
    let (mut reader, writer) = stream.into_split();
    let writer = Arc::new(Mutex::new(writer));

    loop {
        let frame = tokio::select! {
            _ = shutdown.cancelled() => break,
            frame = tokio::time::timeout(TCP_IDLE_TIMEOUT, read_with_length_prefix(&mut reader)) => frame,
        };

        let raw = match frame {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                debug!(client = %peer, error = %e, "TCP connection closed");
                break;
            }
            Err(_) => {
                debug!(client = %peer, "TCP connection idle, closing");
                break;
            }
        };

        let sink = TcpReplySink {
            writer: writer.clone(),
        };
        let handler = handler.clone();
        tokio::spawn(async move {
            handle_message(&handler, raw, peer, TransportProtocol::Tcp, &sink).await;
        });
    }
}

async fn handle_message(
    handler: &HandleDnsQueryUseCase,
    raw: Vec<u8>,
    peer: SocketAddr,
    protocol: TransportProtocol,
    sink: &dyn ReplySink,
) {
    match DnsRequest::from_wire(raw.as_slice(), peer.ip(), protocol) {
        Ok(request) => {
            handler.execute(&request, sink).await;
        }
        Err(e) => {
            debug!(client = %peer, protocol = %protocol, error = %e, "Malformed query");
            if let Some(reply) = header_only_response(&raw, ResponseCode::FormErr) {
                if let Err(e) = sink.send_reply(&reply).await {
                    debug!(client = %peer, error = %e, "Failed to send FORMERR");
                }
            }
        }
    }
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
