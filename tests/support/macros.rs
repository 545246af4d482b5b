/// A search reply as a UPnP device would send it
#[macro_use]
macro_rules! ssdp_reply {
    ($st:expr, $uuid:expr, $location:expr) => {
        [
            "HTTP/1.1 200 OK",
            "CACHE-CONTROL: max-age=1800",
            &format!(
                "DATE: {}",
                chrono::Utc::now().format("%a, %d %b %Y %X GMT")
            ),
            "EXT:",
            &format!("LOCATION: {}", $location),
            "SERVER: Linux/4.19.71+, UPnP/1.0, Portable SDK for UPnP devices/1.6.18",
            &format!("ST: {}", $st),
            &format!("USN: uuid:{}::{}", $uuid, $st),
            "",
            "",
        ]
        .join("\r\n")
    };
}
