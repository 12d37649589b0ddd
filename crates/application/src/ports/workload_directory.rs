use async_trait::async_trait;
use berth_dns_domain::{DomainError, Workload};

/// Read-only view of the container runtime's inventory.
#[async_trait]
pub trait WorkloadDirectory: Send + Sync {
    /// One listing call against the runtime; no caching, no retries.
    async fn list_running_workloads(&self) -> Result<Vec<Workload>, DomainError>;
}
