use berth_dns_domain::DomainError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Address of the container runtime's API.
///
/// Accepts the `DOCKER_HOST` forms `unix:///var/run/docker.sock` and
/// `tcp://host:2375` (plain HTTP). A bare absolute path is read as a Unix
/// socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEndpoint {
    Unix(PathBuf),
    Tcp(String),
}

impl FromStr for RuntimeEndpoint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(path) = s.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(invalid(s, "missing socket path"));
            }
            return Ok(RuntimeEndpoint::Unix(PathBuf::from(path)));
        }

        if let Some(authority) = s.strip_prefix("tcp://").or_else(|| s.strip_prefix("http://")) {
            let authority = authority.trim_end_matches('/');
            if authority.is_empty() || authority.contains('/') {
                return Err(invalid(s, "expected host:port"));
            }
            return Ok(RuntimeEndpoint::Tcp(authority.to_string()));
        }

        if s.starts_with('/') {
            return Ok(RuntimeEndpoint::Unix(PathBuf::from(s)));
        }

        Err(invalid(s, "unsupported scheme"))
    }
}

impl fmt::Display for RuntimeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeEndpoint::Unix(path) => write!(f, "unix://{}", path.display()),
            RuntimeEndpoint::Tcp(authority) => write!(f, "tcp://{}", authority),
        }
    }
}

fn invalid(endpoint: &str, reason: &str) -> DomainError {
    DomainError::ConfigError(format!(
        "Invalid runtime endpoint '{}': {}",
        endpoint, reason
    ))
}
