use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{DnsTransport, HttpsTransport};
use async_trait::async_trait;
use berth_dns_application::ports::UpstreamResolver;
use berth_dns_domain::{DnsQuery, DomainError};
use hickory_proto::rr::Record;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Forwards delegated questions to a pool of DoH servers.
///
/// Each question goes to one server picked uniformly at random; a server
/// listed more than once is picked proportionally more often. There is no
/// retry and no failover: a failed exchange is reported to the caller.
pub struct DohUpstreamResolver {
    transports: Vec<Arc<dyn DnsTransport>>,
    timeout: Duration,
}

impl DohUpstreamResolver {
    pub fn new(servers: &[String], timeout: Duration) -> Result<Self, DomainError> {
        let transports = servers
            .iter()
            .map(|server| Arc::new(HttpsTransport::new(server.as_str())) as Arc<dyn DnsTransport>)
            .collect();
        Self::with_transports(transports, timeout)
    }

    pub fn with_transports(
        transports: Vec<Arc<dyn DnsTransport>>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        if transports.is_empty() {
            return Err(DomainError::NoUpstreamServers);
        }
        Ok(Self {
            transports,
            timeout,
        })
    }

    pub fn pool_size(&self) -> usize {
        self.transports.len()
    }

    fn pick(&self) -> &Arc<dyn DnsTransport> {
        &self.transports[fastrand::usize(..self.transports.len())]
    }
}

#[async_trait]
impl UpstreamResolver for DohUpstreamResolver {
    #[instrument(skip(self, query), fields(domain = %query.name, record_type = %query.record_type))]
    async fn forward(&self, query: &DnsQuery) -> Result<Vec<Record>, DomainError> {
        let transport = self.pick();
        let (id, message) = MessageBuilder::build_query(query)?;

        debug!(
            server = transport.server(),
            protocol = transport.protocol_name(),
            "Forwarding query upstream"
        );

        let response = transport.send(&message, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {}",
                parsed.id, id
            )));
        }

        if parsed.truncated {
            warn!(
                server = transport.server(),
                answers = parsed.answers.len(),
                "Upstream reply truncated, relaying partial answers"
            );
        }

        debug!(
            server = transport.server(),
            rcode = ResponseParser::rcode_to_status(parsed.rcode),
            answers = parsed.answers.len(),
            "Upstream answered"
        );

        Ok(parsed.answers)
    }
}
