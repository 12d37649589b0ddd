#![allow(dead_code)]
use berth_dns_domain::{Workload, WorkloadStatus};

pub const WEB_ID: &str = "abc123def4567890abc123def4567890abc123def4567890abc123def4567890";
pub const DB_ID: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

pub struct WorkloadBuilder {
    id: String,
    status: WorkloadStatus,
    aliases: Vec<String>,
}

impl WorkloadBuilder {
    pub fn new() -> Self {
        Self {
            id: WEB_ID.to_string(),
            status: WorkloadStatus::Running,
            aliases: vec![],
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn status(mut self, status: WorkloadStatus) -> Self {
        self.status = status;
        self
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    pub fn build(self) -> Workload {
        Workload::new(self.id, self.status, self.aliases)
    }
}

impl Default for WorkloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}
