use std::fmt::Display;

/// Result for building a probe
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised before any packet is sent
///
/// Network failures are never returned through this type; they are reported as
/// [`ProbeOutcome::TransportError`](crate::ProbeOutcome::TransportError).
#[derive(Debug)]
pub enum Error {
    /// Search target is empty or not valid `ST` header syntax
    InvalidSearchTarget(String),
    /// `MX` must be at least one second
    InvalidMaxWait(u8),
}

impl Error {
    pub fn is_invalid_search_target(&self) -> bool {
        matches!(self, Error::InvalidSearchTarget(_))
    }

    pub fn is_invalid_max_wait(&self) -> bool {
        matches!(self, Error::InvalidMaxWait(_))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSearchTarget(st) => write!(f, "Invalid search target: '{}'", st),
            Self::InvalidMaxWait(mx) => write!(f, "MX must be a positive number of seconds, got {}", mx),
        }
    }
}

impl std::error::Error for Error {}

/// Stage of a probe at which the socket failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStage {
    /// Creating or binding the socket
    Bind,
    /// Applying socket options
    Configure,
    /// Sending the M-SEARCH datagram
    Send,
    /// Waiting for the reply
    Receive,
    /// Starting the runtime for a blocking probe
    Runtime,
}

impl Display for ProbeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bind => write!(f, "bind"),
            Self::Configure => write!(f, "configure"),
            Self::Send => write!(f, "send"),
            Self::Receive => write!(f, "receive"),
            Self::Runtime => write!(f, "runtime"),
        }
    }
}

/// Socket failure other than a timeout, with the system error kept intact
#[derive(Debug)]
pub struct TransportError {
    stage: ProbeStage,
    source: std::io::Error,
}

impl TransportError {
    pub fn new(stage: ProbeStage, source: std::io::Error) -> Self {
        Self { stage, source }
    }

    pub fn stage(&self) -> ProbeStage {
        self.stage
    }

    pub fn kind(&self) -> std::io::ErrorKind {
        self.source.kind()
    }

    pub fn raw_os_error(&self) -> Option<i32> {
        self.source.raw_os_error()
    }

    pub fn io_error(&self) -> &std::io::Error {
        &self.source
    }

    pub fn into_io_error(self) -> std::io::Error {
        self.source
    }
}

impl Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.stage, self.source)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
