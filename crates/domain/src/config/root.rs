use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::runtime::RuntimeConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

/// Main configuration structure for Berth DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening socket
    #[serde(default)]
    pub server: ServerConfig,

    /// Local resolution rules (master address, local clients)
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// DNS-over-HTTPS upstream pool
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Container runtime API
    #[serde(default)]
    pub runtime: RuntimeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. berth-dns.toml in current directory
    /// 3. /etc/berth-dns/config.toml
    /// 4. Default configuration
    ///
    /// Overrides (environment and command line) are applied on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(master) = overrides.master_address {
            self.resolver.master_address = Some(master);
        }
        if let Some(list) = overrides.local_clients {
            self.resolver.local_clients = list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(endpoint) = overrides.runtime_endpoint {
            self.runtime.endpoint = endpoint;
        }
        if let Some(servers) = overrides.upstream_servers {
            self.upstream.servers = servers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.upstream.servers.iter().all(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "No upstream servers configured".to_string(),
            ));
        }

        if self.runtime.endpoint.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Container runtime endpoint cannot be empty".to_string(),
            ));
        }

        self.resolver.master_ip()?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("berth-dns.toml").exists() {
            Some("berth-dns.toml".to_string())
        } else if std::path::Path::new("/etc/berth-dns/config.toml").exists() {
            Some("/etc/berth-dns/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line and environment overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub master_address: Option<String>,
    /// Comma-separated, as in `LOCAL_DOCKER_NAMES=dns,nginx`.
    pub local_clients: Option<String>,
    pub runtime_endpoint: Option<String>,
    pub upstream_servers: Option<Vec<String>>,
    pub log_level: Option<String>,
}
