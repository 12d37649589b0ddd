use serde::{Deserialize, Serialize};
use std::time::Duration;

/// DNS-over-HTTPS upstream pool.
///
/// Each request picks one entry uniformly at random, so listing a server
/// several times gives it proportionally more traffic.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    /// Seconds allowed for one upstream round trip.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(super::clamp_timeout(self.query_timeout))
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_servers() -> Vec<String> {
    vec![
        "223.5.5.5".to_string(),
        "223.5.5.5".to_string(),
        "223.5.5.5".to_string(),
        "223.6.6.6".to_string(),
    ]
}

fn default_query_timeout() -> u64 {
    5
}
