pub mod resolver;
pub mod udp;

use async_trait::async_trait;
use std::time::Duration;
use stubdns_domain::DomainError;

pub use resolver::resolve_server;
pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// One send and one receive against a single upstream. No retries.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
