//! HTTPS Transport for DNS queries, DNS-over-HTTPS GET form (RFC 8484 §4.1)
//!
//! The query travels base64url-encoded without padding in the `dns` query
//! parameter; the response body is the raw wire-format reply.
//!
//! ```text
//! GET /dns-query?dns=AAABAAABAAAAAAAAB2V4YW1wbGUDY29tAAABAAE HTTP/2
//! Accept: application/dns-message
//! ```

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use berth_dns_domain::DomainError;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Shared client with connection pooling; HTTP/2 negotiated via ALPN.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

pub struct HttpsTransport {
    server: String,
    endpoint: String,
}

impl HttpsTransport {
    /// Transport for `https://{server}/dns-query`.
    pub fn new(server: impl Into<String>) -> Self {
        let server = server.into();
        let endpoint = format!("https://{}/dns-query", server);
        Self { server, endpoint }
    }

    /// Transport for an explicit endpoint URL, e.g. a plain-HTTP test server.
    pub fn with_endpoint(server: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full request URL for `message_bytes`.
    pub fn request_url(&self, message_bytes: &[u8]) -> String {
        format!(
            "{}?dns={}",
            self.endpoint,
            URL_SAFE_NO_PAD.encode(message_bytes)
        )
    }

    fn transport_error(&self, e: reqwest::Error) -> DomainError {
        DomainError::Transport {
            server: self.server.clone(),
            reason: e.to_string(),
        }
    }
}

#[async_trait]
impl DnsTransport for HttpsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let url = self.request_url(message_bytes);

        debug!(
            server = %self.server,
            message_len = message_bytes.len(),
            "Sending DoH query"
        );

        let exchange = async {
            let response = SHARED_CLIENT
                .get(&url)
                .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(DomainError::UpstreamHttpStatus {
                    server: self.server.clone(),
                    status: status.as_u16(),
                });
            }

            response.bytes().await.map_err(|e| self.transport_error(e))
        };

        let response_bytes = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server.clone(),
            })??;

        debug!(
            server = %self.server,
            response_len = response_bytes.len(),
            "DoH response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes.to_vec(),
        })
    }

    fn protocol_name(&self) -> &'static str {
        "HTTPS"
    }

    fn server(&self) -> &str {
        &self.server
    }
}
