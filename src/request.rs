use super::constants::SSDP_IP;
use super::error::{Error, Result};

use regex::Regex;

use std::fmt::{self, Display};

/// An M-SEARCH query, ready to be put on the wire
///
/// The `HOST` header always names the SSDP multicast group, whatever address
/// the probe actually sends to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryRequest {
    search_target: String,
    mx: u8,
}

impl DiscoveryRequest {
    /// Build a request for `search_target` (the `ST` header) advertising an `MX` of `mx` seconds
    ///
    /// # Example
    ///
    /// ```
    /// # use ssdp_probe::DiscoveryRequest;
    /// let request = DiscoveryRequest::new("upnp:rootdevice", 3).unwrap();
    /// assert!(request.to_string().starts_with("M-SEARCH * HTTP/1.1\r\n"));
    /// ```
    pub fn new<S: Into<String>>(search_target: S, mx: u8) -> Result<Self> {
        let search_target = search_target.into();

        // Same token grammar compliant responders accept: `ssdp:all`, `uuid:...`, `urn:...`
        let valid_st = Regex::new(r"^[a-zA-Z0-9.\-_]+:[a-zA-Z0-9.\-_:]+$").unwrap();
        if !valid_st.is_match(&search_target) {
            return Err(Error::InvalidSearchTarget(search_target));
        }
        if mx == 0 {
            return Err(Error::InvalidMaxWait(mx));
        }

        Ok(Self { search_target, mx })
    }

    pub fn search_target(&self) -> &str {
        &self.search_target
    }

    pub fn mx(&self) -> u8 {
        self.mx
    }

    pub fn host(&self) -> &'static str {
        SSDP_IP
    }

    /// Wire encoding of the request
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl Display for DiscoveryRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body: &str = &[
            "M-SEARCH * HTTP/1.1",
            &format!("HOST: {}", self.host()),
            "MAN: \"ssdp:discover\"",
            &format!("ST: {}", self.search_target),
            &format!("MX: {}", self.mx),
            "",
            "",
        ]
        .join("\r\n");

        f.write_str(body)
    }
}
