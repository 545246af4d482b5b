#![allow(dead_code)]

#[macro_use]
mod macros;
mod transport;

pub use transport::{DeniedSocket, ResetSocket, UnreachableSocket};

use tokio::{
    net::UdpSocket,
    sync::oneshot::{self, Receiver as OneShotReceiver},
    time::{sleep, Duration},
};

use std::net::SocketAddr;

/// Start Logger
pub fn init_logger() {
    if let Err(e) = pretty_env_logger::try_init() {
        log::warn!(target: "test::support::init_logger", "Logger init() returned '{}'", e);
    }
}

/// A UDP responder on loopback that answers the first datagram it receives
pub struct Responder {
    addr: SocketAddr,
    request_rx: OneShotReceiver<(Vec<u8>, SocketAddr)>,
}

impl Responder {
    /// Reply with `reply` after `delay`
    pub async fn replying(reply: Vec<u8>, delay: Duration) -> Responder {
        Self::start(Some(reply), delay).await
    }

    /// Receive the request but never answer
    pub async fn silent() -> Responder {
        Self::start(None, Duration::from_secs(0)).await
    }

    async fn start(reply: Option<Vec<u8>>, delay: Duration) -> Responder {
        init_logger();

        // Bind Socket
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = socket.local_addr().unwrap();
        let (request_tx, request_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut rbuf = [0; 2048];
            let (len, from) = match socket.recv_from(&mut rbuf).await {
                Ok(r) => r,
                Err(e) => {
                    log::warn!(target: "test::support::responder", "recv_from failed: {}", e);
                    return;
                }
            };
            request_tx.send((rbuf[..len].to_vec(), from)).ok();

            match reply {
                Some(reply) => {
                    sleep(delay).await;
                    socket.send_to(&reply, from).await.unwrap();
                }
                // Keep the port open while the probe waits
                None => sleep(Duration::from_secs(60)).await,
            }
        });

        Responder { addr, request_rx }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// The request the responder received and where it came from
    pub async fn request(self) -> (Vec<u8>, SocketAddr) {
        self.request_rx.await.unwrap()
    }
}

/// Random data helpers
pub mod rand_data {
    use rand::{distributions::Alphanumeric, Rng};

    pub fn string(len: usize) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .map(char::from)
            .take(len)
            .collect()
    }

    pub fn bytes(len: usize) -> Vec<u8> {
        (0..len).map(|_| rand::random::<u8>()).collect()
    }

    pub fn uuid() -> String {
        let rand_string = string(32).to_lowercase();
        format!(
            "{}-{}-{}-{}-{}",
            &rand_string[0..8],
            &rand_string[8..12],
            &rand_string[12..16],
            &rand_string[16..20],
            &rand_string[20..32]
        )
    }
}
