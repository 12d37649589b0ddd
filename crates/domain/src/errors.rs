use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Cannot build {record_type} record for address {address}")]
    AddressFamilyMismatch {
        record_type: String,
        address: String,
    },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Failed to encode DNS message: {0}")]
    MessageEncoding(String),

    #[error("Container runtime unreachable at {endpoint}: {reason}")]
    RuntimeUnavailable { endpoint: String, reason: String },

    #[error("Container runtime returned HTTP {status}: {body}")]
    RuntimeStatus { status: u16, body: String },

    #[error("Malformed container runtime response: {0}")]
    RuntimeResponse(String),

    #[error("Timeout waiting for container runtime at {endpoint}")]
    RuntimeTimeout { endpoint: String },

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Upstream {server} returned HTTP {status}")]
    UpstreamHttpStatus { server: String, status: u16 },

    #[error("No upstream servers configured")]
    NoUpstreamServers,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Errors raised while talking to the container runtime.
    pub fn is_runtime_error(&self) -> bool {
        matches!(
            self,
            DomainError::RuntimeUnavailable { .. }
                | DomainError::RuntimeStatus { .. }
                | DomainError::RuntimeResponse(_)
                | DomainError::RuntimeTimeout { .. }
        )
    }

    /// Errors raised while talking to an upstream resolver.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::Transport { .. }
                | DomainError::UpstreamHttpStatus { .. }
        )
    }
}
