use async_trait::async_trait;
use tokio::net::UdpSocket;

use std::io;
use std::net::SocketAddr;

/// The UDP socket operations a probe needs
///
/// Implemented for [`tokio::net::UdpSocket`]. A probe binds one `Transport`,
/// uses it for a single send and a single receive, then drops it.
#[async_trait]
pub trait Transport: Sized + Send + Sync {
    async fn bind(addr: SocketAddr) -> io::Result<Self>;

    fn set_multicast_ttl_v4(&self, ttl: u32) -> io::Result<()>;

    fn local_addr(&self) -> io::Result<SocketAddr>;

    async fn send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize>;

    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)>;
}

#[async_trait]
impl Transport for UdpSocket {
    async fn bind(addr: SocketAddr) -> io::Result<Self> {
        UdpSocket::bind(addr).await
    }

    fn set_multicast_ttl_v4(&self, ttl: u32) -> io::Result<()> {
        UdpSocket::set_multicast_ttl_v4(self, ttl)
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        UdpSocket::local_addr(self)
    }

    async fn send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize> {
        UdpSocket::send_to(self, buf, target).await
    }

    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        UdpSocket::recv_from(self, buf).await
    }
}
