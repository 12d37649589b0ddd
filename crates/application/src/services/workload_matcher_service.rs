use berth_dns_domain::{DomainError, Workload};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::WorkloadDirectory;

/// Looks a name up against a fresh inventory snapshot.
pub struct WorkloadMatcherService {
    directory: Arc<dyn WorkloadDirectory>,
}

impl WorkloadMatcherService {
    pub fn new(directory: Arc<dyn WorkloadDirectory>) -> Self {
        Self { directory }
    }

    /// First running workload identified by `name`, if any.
    ///
    /// Every call lists the inventory again; nothing is cached between queries.
    #[instrument(skip(self))]
    pub async fn find_running(&self, name: &str) -> Result<Option<Workload>, DomainError> {
        if name.is_empty() {
            return Ok(None);
        }

        let workloads = self.directory.list_running_workloads().await?;
        let found = Workload::find_match(&workloads, name).cloned();

        debug!(
            inventory = workloads.len(),
            matched = ?found.as_ref().map(Workload::short_id),
            "Workload lookup finished"
        );

        Ok(found)
    }
}
