//! One-shot SSDP discovery probe
//!
//! Sends a single UPnP `M-SEARCH` request to the SSDP multicast group
//! (`239.255.255.250:1900`) and waits a bounded time for one reply. The result
//! is a [`ProbeOutcome`]: a reply, a timeout, or a transport failure with the
//! system error preserved.
//!
//! ```no_run
//! # use std::time::Duration;
//! # async fn check() -> Result<(), ssdp_probe::Error> {
//! let outcome = ssdp_probe::probe("upnp:rootdevice", 3, Duration::from_secs(5)).await?;
//! match outcome {
//!     ssdp_probe::ProbeOutcome::Replied(res) => println!("{} answered", res.from()),
//!     ssdp_probe::ProbeOutcome::TimedOut => println!("no responder"),
//!     ssdp_probe::ProbeOutcome::TransportError(e) => println!("probe failed: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
mod constants;
mod discover;
mod error;
mod outcome;
mod request;
mod response;
mod transport;

pub use constants::{DEFAULT_SSDP_MAXTIME, DEFAULT_TIMEOUT, SSDP_ADDR, SSDP_IP, SSDP_ROOTDEVICE};
pub use discover::Probe;
pub use error::{Error, ProbeStage, Result, TransportError};
pub use outcome::{ProbeOutcome, ProbeState};
pub use request::DiscoveryRequest;
pub use response::{DiscoveryResponse, PayloadStatus};
pub use transport::Transport;

use std::time::Duration;

/// Probe the SSDP multicast group for `search_target`
///
/// Sends one M-SEARCH advertising `mx` seconds and waits up to `timeout` for
/// one reply. Only invalid arguments produce an `Err`; every network result,
/// including failures, is a [`ProbeOutcome`].
pub async fn probe(search_target: &str, mx: u8, timeout: Duration) -> Result<ProbeOutcome> {
    let request = DiscoveryRequest::new(search_target, mx)?;
    Ok(Probe::new(request).timeout(timeout).send().await)
}

/// Blocking form of [`probe`]
///
/// Runs on the calling thread. From inside an async runtime the outcome is a
/// [`ProbeStage::Runtime`] transport error.
pub fn probe_blocking(search_target: &str, mx: u8, timeout: Duration) -> Result<ProbeOutcome> {
    let request = DiscoveryRequest::new(search_target, mx)?;
    Ok(Probe::new(request).timeout(timeout).send_blocking())
}
