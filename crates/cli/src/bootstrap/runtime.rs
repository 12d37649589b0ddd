use berth_dns_domain::Config;
use berth_dns_infrastructure::runtime::{DockerWorkloadDirectory, RuntimeEndpoint};
use std::sync::Arc;
use tracing::{error, info};

/// Builds the runtime client and checks the daemon answers before serving.
pub async fn connect_runtime(config: &Config) -> anyhow::Result<Arc<DockerWorkloadDirectory>> {
    let endpoint: RuntimeEndpoint = config.runtime.endpoint.parse()?;
    info!(endpoint = %endpoint, "Connecting to container runtime");

    let directory = DockerWorkloadDirectory::new(endpoint, config.runtime.request_timeout());

    directory.ping().await.map_err(|e| {
        error!(endpoint = %directory.endpoint(), error = %e, "Container runtime unreachable");
        anyhow::anyhow!(e)
    })?;

    info!(endpoint = %directory.endpoint(), "Container runtime reachable");
    Ok(Arc::new(directory))
}
