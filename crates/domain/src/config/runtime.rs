use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_RUNTIME_ENDPOINT: &str = "unix:///var/run/docker.sock";

/// Where the container runtime's API is reachable.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuntimeConfig {
    /// `unix:///path/to/socket` or `tcp://host:port`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Seconds allowed for one inventory listing.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl RuntimeConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(super::clamp_timeout(self.timeout))
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_RUNTIME_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    5
}
