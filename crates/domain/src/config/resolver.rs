use super::errors::ConfigError;
use crate::LocalClients;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Address returned for every name that matches a running workload.
    #[serde(default)]
    pub master_address: Option<String>,

    /// Names answered with the requesting client's own address.
    #[serde(default)]
    pub local_clients: Vec<String>,

    /// TTL, in seconds, of synthesized answers.
    #[serde(default = "default_answer_ttl")]
    pub answer_ttl: u32,
}

impl ResolverConfig {
    pub fn master_ip(&self) -> Result<IpAddr, ConfigError> {
        let raw = self
            .master_address
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing("resolver.master_address (MASTER_IP)"))?;

        raw.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid master address '{}'", raw))
        })
    }

    pub fn local_client_set(&self) -> LocalClients {
        LocalClients::from_names(&self.local_clients)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            master_address: None,
            local_clients: vec![],
            answer_ttl: default_answer_ttl(),
        }
    }
}

fn default_answer_ttl() -> u32 {
    3600
}
