use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

pub const SSDP_IP: &str = "239.255.255.250:1900";
pub const SSDP_GROUP: Ipv4Addr = Ipv4Addr::new(239, 255, 255, 250);
pub const SSDP_PORT: u16 = 1900;
pub const SSDP_ROOTDEVICE: &str = "upnp:rootdevice";
pub const DEFAULT_SSDP_MAXTIME: u8 = 3;
pub const DEFAULT_TIMEOUT: u64 = 5;

/// UDA 1.1 recommends a TTL of 2 for discovery traffic
pub const DEFAULT_MULTICAST_TTL: u32 = 2;

/// Large enough for any UDP datagram, so replies are never truncated
pub const RECV_BUFFER_LEN: usize = 65_536;

pub const SSDP_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(SSDP_GROUP, SSDP_PORT));
