use super::error::TransportError;
use super::response::DiscoveryResponse;

use std::fmt::{self, Display};

/// Progress of a single probe
///
/// `Idle -> Sent -> {Replied | TimedOut | TransportError} -> Closed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    Idle,
    Sent,
    Replied,
    TimedOut,
    TransportError,
    Closed,
}

impl Display for ProbeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Sent => write!(f, "sent"),
            Self::Replied => write!(f, "replied"),
            Self::TimedOut => write!(f, "timed out"),
            Self::TransportError => write!(f, "transport error"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Result of one M-SEARCH exchange
///
/// A timeout is an ordinary outcome, not an error: the responder may be offline
/// or may have chosen not to answer.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// One datagram arrived before the timeout
    Replied(DiscoveryResponse),
    /// Nothing arrived before the timeout
    TimedOut,
    /// The socket failed for a reason other than a timeout
    TransportError(TransportError),
}

impl ProbeOutcome {
    pub fn is_replied(&self) -> bool {
        matches!(self, ProbeOutcome::Replied(_))
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, ProbeOutcome::TimedOut)
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, ProbeOutcome::TransportError(_))
    }

    pub fn response(&self) -> Option<&DiscoveryResponse> {
        match self {
            Self::Replied(res) => Some(res),
            _ => None,
        }
    }

    pub fn into_response(self) -> Option<DiscoveryResponse> {
        match self {
            Self::Replied(res) => Some(res),
            _ => None,
        }
    }

    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            Self::TransportError(e) => Some(e),
            _ => None,
        }
    }

    /// Terminal state the probe finished in
    pub fn state(&self) -> ProbeState {
        match self {
            Self::Replied(_) => ProbeState::Replied,
            Self::TimedOut => ProbeState::TimedOut,
            Self::TransportError(_) => ProbeState::TransportError,
        }
    }
}

impl From<DiscoveryResponse> for ProbeOutcome {
    fn from(res: DiscoveryResponse) -> Self {
        ProbeOutcome::Replied(res)
    }
}

impl From<TransportError> for ProbeOutcome {
    fn from(e: TransportError) -> Self {
        ProbeOutcome::TransportError(e)
    }
}
