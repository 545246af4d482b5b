use super::constants::{DEFAULT_MULTICAST_TTL, DEFAULT_TIMEOUT, RECV_BUFFER_LEN, SSDP_ADDR};
use super::error::{ProbeStage, TransportError};
use super::outcome::{ProbeOutcome, ProbeState};
use super::request::DiscoveryRequest;
use super::response::DiscoveryResponse;
use super::transport::Transport;

use tokio::{
    net::UdpSocket,
    time::{timeout, Duration},
};

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

const LOG_TARGET: &str = "ssdp_probe::probe";

/// A single M-SEARCH exchange
///
/// Sends one request and waits at most `timeout` for one reply. The socket
/// lives only as long as the exchange and is released on every path.
///
/// # Example
///
/// ```no_run
/// # use ssdp_probe::{DiscoveryRequest, Probe};
/// # use std::time::Duration;
/// # async fn check() -> Result<(), ssdp_probe::Error> {
/// let request = DiscoveryRequest::new("upnp:rootdevice", 3)?;
/// let outcome = Probe::new(request)
///     .timeout(Duration::from_secs(5))
///     .send()
///     .await;
///
/// if let Some(res) = outcome.response() {
///     println!("{} answered", res.from());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Probe {
    request: DiscoveryRequest,
    timeout: Duration,
    destination: SocketAddr,
    bind_addr: Option<SocketAddr>,
    multicast_ttl: u32,
}

impl Probe {
    pub fn new(request: DiscoveryRequest) -> Self {
        Self {
            request,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            destination: SSDP_ADDR,
            bind_addr: None,
            multicast_ttl: DEFAULT_MULTICAST_TTL,
        }
    }

    /// How long to wait for a reply once the request is sent
    ///
    /// Independent of the request's `MX`, but should exceed it to give
    /// responders a fair window.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send the request somewhere other than the SSDP multicast group
    pub fn destination(mut self, destination: SocketAddr) -> Self {
        self.destination = destination;
        self
    }

    /// Local address to bind; defaults to the unspecified address of the
    /// destination's family with an ephemeral port
    pub fn bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = Some(bind_addr);
        self
    }

    /// TTL for multicast requests; ignored for unicast destinations
    pub fn multicast_ttl(mut self, ttl: u32) -> Self {
        self.multicast_ttl = ttl;
        self
    }

    pub fn request(&self) -> &DiscoveryRequest {
        &self.request
    }

    /// Run the exchange on a [`UdpSocket`]
    pub async fn send(&self) -> ProbeOutcome {
        self.send_via::<UdpSocket>().await
    }

    /// Run the exchange on a caller-chosen [`Transport`]
    pub async fn send_via<T: Transport>(&self) -> ProbeOutcome {
        log::trace!(target: LOG_TARGET, "{}: ST={} MX={} -> {}",
            ProbeState::Idle,
            self.request.search_target(),
            self.request.mx(),
            self.destination
        );

        let outcome = match self.exchange::<T>().await {
            Ok(Some(res)) => ProbeOutcome::Replied(res),
            Ok(None) => ProbeOutcome::TimedOut,
            Err(e) => ProbeOutcome::TransportError(e),
        };

        match &outcome {
            ProbeOutcome::Replied(res) => log::debug!(target: LOG_TARGET,
                "{}: {} bytes from {}", outcome.state(), res.payload().len(), res.from()
            ),
            ProbeOutcome::TimedOut => log::debug!(target: LOG_TARGET,
                "{}: no reply within {:?}", outcome.state(), self.timeout
            ),
            ProbeOutcome::TransportError(e) => log::debug!(target: LOG_TARGET,
                "{}: {}", outcome.state(), e
            ),
        }
        log::trace!(target: LOG_TARGET, "{}", ProbeState::Closed);

        outcome
    }

    /// Run the exchange on the calling thread
    ///
    /// Drives a private single-threaded runtime. Called from inside an async
    /// context it returns a [`ProbeStage::Runtime`] transport error without
    /// sending anything.
    pub fn send_blocking(&self) -> ProbeOutcome {
        if tokio::runtime::Handle::try_current().is_ok() {
            return TransportError::new(
                ProbeStage::Runtime,
                io::Error::new(
                    io::ErrorKind::Other,
                    "blocking probe called from within a tokio runtime",
                ),
            )
            .into();
        }

        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_io()
            .enable_time()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => return TransportError::new(ProbeStage::Runtime, e).into(),
        };

        rt.block_on(self.send())
    }

    // Socket is dropped when this returns, whichever branch is taken
    async fn exchange<T: Transport>(&self) -> Result<Option<DiscoveryResponse>, TransportError> {
        let socket = T::bind(self.local_addr())
            .await
            .map_err(|e| TransportError::new(ProbeStage::Bind, e))?;

        if let IpAddr::V4(ip) = self.destination.ip() {
            if ip.is_multicast() {
                socket
                    .set_multicast_ttl_v4(self.multicast_ttl)
                    .map_err(|e| TransportError::new(ProbeStage::Configure, e))?;
            }
        }

        // Send ssdp request
        let body = self.request.to_bytes();
        let sent = socket
            .send_to(&body, self.destination)
            .await
            .map_err(|e| TransportError::new(ProbeStage::Send, e))?;
        log::trace!(target: LOG_TARGET, "{}: {} of {} bytes from {:?}",
            ProbeState::Sent,
            sent,
            body.len(),
            socket.local_addr().ok()
        );

        let mut rbuf = vec![0; RECV_BUFFER_LEN];
        match timeout(self.timeout, socket.recv_from(&mut rbuf)).await {
            Ok(Ok((len, from))) => {
                rbuf.truncate(len);
                Ok(Some(DiscoveryResponse::new(from, rbuf)))
            }
            Ok(Err(e)) => Err(TransportError::new(ProbeStage::Receive, e)),
            Err(_) => Ok(None),
        }
    }

    fn local_addr(&self) -> SocketAddr {
        match self.bind_addr {
            Some(addr) => addr,
            None if self.destination.is_ipv6() => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
            None => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
        }
    }
}
