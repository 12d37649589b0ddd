use berth_dns_application::ports::WorkloadDirectory;
use berth_dns_application::use_cases::ResolveQueryUseCase;
use berth_dns_domain::Config;
use berth_dns_infrastructure::dns::DohUpstreamResolver;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub use_case: Arc<ResolveQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config, directory: Arc<dyn WorkloadDirectory>) -> anyhow::Result<Self> {
        let master_address = config.resolver.master_ip()?;
        info!(master_address = %master_address, "Workload names resolve to master address");

        let local_clients = Arc::new(config.resolver.local_client_set());
        if !local_clients.is_empty() {
            info!(count = local_clients.len(), "Local client names loaded");
        }

        let upstream = Arc::new(Self::build_upstream(config)?);

        let use_case = Arc::new(
            ResolveQueryUseCase::new(directory, upstream, local_clients, master_address)
                .with_answer_ttl(config.resolver.answer_ttl),
        );

        Ok(Self { use_case })
    }

    fn build_upstream(config: &Config) -> anyhow::Result<DohUpstreamResolver> {
        let servers: Vec<String> = config
            .upstream
            .servers
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout = config.upstream.timeout();
        let upstream = DohUpstreamResolver::new(&servers, timeout)?;

        info!(
            servers = ?servers,
            timeout_secs = timeout.as_secs(),
            "DoH upstream pool ready"
        );
        Ok(upstream)
    }
}
