pub mod https;

use async_trait::async_trait;
use berth_dns_domain::DomainError;
use std::time::Duration;

pub use https::HttpsTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
}

/// One round trip of a wire-format query to a single upstream server.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;

    /// Server identity used in logs and errors.
    fn server(&self) -> &str;
}
