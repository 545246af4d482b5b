use std::net::SocketAddr;
use std::str;

const MAX_HEADERS: usize = 64;

/// Whether a reply payload forms a complete HTTP response head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadStatus {
    Parsed,
    Unparsed,
}

/// A single datagram received in answer to an M-SEARCH
///
/// The payload is kept exactly as it arrived. Header accessors are a read-only
/// view over it and return `None` when the payload is not a well-formed
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryResponse {
    from: SocketAddr,
    payload: Vec<u8>,
    status: PayloadStatus,
}

impl DiscoveryResponse {
    pub fn new(from: SocketAddr, payload: Vec<u8>) -> Self {
        let status = if parse_head(&payload).is_some() {
            PayloadStatus::Parsed
        } else {
            PayloadStatus::Unparsed
        };

        Self {
            from,
            payload,
            status,
        }
    }

    /// Address the reply came from
    pub fn from(&self) -> SocketAddr {
        self.from
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    pub fn status(&self) -> PayloadStatus {
        self.status
    }

    pub fn is_parsed(&self) -> bool {
        self.status == PayloadStatus::Parsed
    }

    /// HTTP status code of the reply, e.g. `200`
    pub fn status_code(&self) -> Option<u16> {
        let mut headers = [httparse::EMPTY_HEADER; MAX_HEADERS];
        let mut res = httparse::Response::new(&mut headers);
        match res.parse(&self.payload) {
            Ok(httparse::Status::Complete(_)) => res.code,
            _ => None,
        }
    }

    /// Value of the first header called `name`, compared case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        let mut headers = [httparse::EMPTY_HEADER; MAX_HEADERS];
        let mut res = httparse::Response::new(&mut headers);
        match res.parse(&self.payload) {
            Ok(httparse::Status::Complete(_)) => {}
            _ => return None,
        }

        let value = res
            .headers
            .iter()
            .find(|x| x.name.eq_ignore_ascii_case(name))?
            .value;
        str::from_utf8(value).ok().map(str::trim)
    }

    pub fn location(&self) -> Option<&str> {
        self.header("LOCATION")
    }

    pub fn usn(&self) -> Option<&str> {
        self.header("USN")
    }

    pub fn search_target(&self) -> Option<&str> {
        self.header("ST")
    }

    pub fn server(&self) -> Option<&str> {
        self.header("SERVER")
    }

    pub fn cache_control(&self) -> Option<&str> {
        self.header("CACHE-CONTROL")
    }
}

fn parse_head(payload: &[u8]) -> Option<usize> {
    let mut headers = [httparse::EMPTY_HEADER; MAX_HEADERS];
    let mut res = httparse::Response::new(&mut headers);
    match res.parse(payload) {
        Ok(httparse::Status::Complete(len)) => Some(len),
        _ => None,
    }
}
