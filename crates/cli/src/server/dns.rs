use berth_dns_infrastructure::dns::server::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info};

/// Serves DNS over UDP on `bind_addr` until the socket fails.
///
/// Every datagram is handled on its own task, so a slow upstream or runtime
/// call never holds up other clients.
pub async fn start_dns_server(bind_addr: String, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = Arc::new(create_udp_socket(socket_addr)?);
    let handler = Arc::new(handler);

    info!(bind_address = %socket_addr, "DNS server ready");

    run_udp_worker(socket, handler).await
}

async fn run_udp_worker(
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
) -> anyhow::Result<()> {
    let mut recv_buf = [0u8; 4096];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) if is_transient(&e) => {
                debug!(error = %e, "Transient UDP recv error");
                continue;
            }
            Err(e) => {
                error!(error = %e, "UDP recv error");
                return Err(e.into());
            }
        };

        let handler = handler.clone();
        let socket = socket.clone();
        let owned_buf: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        tokio::spawn(async move {
            if let Some(response) = handler.handle_raw_udp(&owned_buf, from).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    debug!(client = %from, error = %e, "Failed to send reply");
                }
            }
        });
    }
}

/// ICMP errors from earlier replies surface on the next recv; they do not
/// affect the socket.
fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionRefused
    )
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

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
