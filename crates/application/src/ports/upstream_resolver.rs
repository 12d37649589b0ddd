use async_trait::async_trait;
use berth_dns_domain::{DnsQuery, DomainError};
use hickory_proto::rr::Record;

#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    /// Send `query` upstream once and return the answer section verbatim.
    async fn forward(&self, query: &DnsQuery) -> Result<Vec<Record>, DomainError>;
}
