use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};

/// The routing probe destination. UDP connect never puts a datagram on the
/// wire; the kernel only picks a route and binds the socket's local side.
const PROBE_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 80);

/// Returns the IPv4 address the OS would use for outbound traffic, or
/// `None` when no route exists (interface down, no default route). The
/// socket is released on every path when it drops at the end of scope.
pub fn local_ipv4() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(PROBE_ADDR).ok()?;
    match socket.local_addr().ok()? {
        SocketAddr::V4(addr) if !addr.ip().is_unspecified() => Some(*addr.ip()),
        _ => None,
    }
}
