//! Sockets that fail in the ways a host network stack can

use async_trait::async_trait;
use ssdp_probe::Transport;

use std::io;
use std::net::SocketAddr;

/// Socket creation refused, as under a sandbox that forbids networking
pub struct DeniedSocket;

#[async_trait]
impl Transport for DeniedSocket {
    async fn bind(_addr: SocketAddr) -> io::Result<Self> {
        // EACCES
        Err(io::Error::from_raw_os_error(13))
    }

    fn set_multicast_ttl_v4(&self, _ttl: u32) -> io::Result<()> {
        unreachable!()
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        unreachable!()
    }

    async fn send_to(&self, _buf: &[u8], _target: SocketAddr) -> io::Result<usize> {
        unreachable!()
    }

    async fn recv_from(&self, _buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        unreachable!()
    }
}

/// No route to the multicast group
pub struct UnreachableSocket;

#[async_trait]
impl Transport for UnreachableSocket {
    async fn bind(_addr: SocketAddr) -> io::Result<Self> {
        Ok(UnreachableSocket)
    }

    fn set_multicast_ttl_v4(&self, _ttl: u32) -> io::Result<()> {
        Ok(())
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        Ok(SocketAddr::from(([0, 0, 0, 0], 40000)))
    }

    async fn send_to(&self, _buf: &[u8], _target: SocketAddr) -> io::Result<usize> {
        // ENETUNREACH
        Err(io::Error::from_raw_os_error(101))
    }

    async fn recv_from(&self, _buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        unreachable!()
    }
}

/// Sends fine, then the receive fails
pub struct ResetSocket;

#[async_trait]
impl Transport for ResetSocket {
    async fn bind(_addr: SocketAddr) -> io::Result<Self> {
        Ok(ResetSocket)
    }

    fn set_multicast_ttl_v4(&self, _ttl: u32) -> io::Result<()> {
        Ok(())
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        Ok(SocketAddr::from(([0, 0, 0, 0], 40000)))
    }

    async fn send_to(&self, buf: &[u8], _target: SocketAddr) -> io::Result<usize> {
        Ok(buf.len())
    }

    async fn recv_from(&self, _buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset by peer"))
    }
}
