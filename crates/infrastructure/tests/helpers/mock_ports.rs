#![allow(dead_code)]
use async_trait::async_trait;
use berth_dns_application::ports::{UpstreamResolver, WorkloadDirectory};
use berth_dns_domain::{DnsQuery, DomainError, Workload, WorkloadStatus};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

pub const WEB_ID: &str = "abc123def4567890abc123def4567890abc123def4567890abc123def4567890";

pub struct StaticDirectory {
    workloads: Vec<Workload>,
}

impl StaticDirectory {
    pub fn new(workloads: Vec<Workload>) -> Self {
        Self { workloads }
    }

    pub fn web() -> Self {
        Self::new(vec![Workload::new(
            WEB_ID,
            WorkloadStatus::Running,
            vec!["/web".to_string()],
        )])
    }
}

#[async_trait]
impl WorkloadDirectory for StaticDirectory {
    async fn list_running_workloads(&self) -> Result<Vec<Workload>, DomainError> {
        Ok(self.workloads.clone())
    }
}

/// Answers every delegated question with one A record.
#[derive(Clone)]
pub struct FixedUpstream {
    address: std::net::Ipv4Addr,
    forwarded: Arc<Mutex<Vec<DnsQuery>>>,
}

impl FixedUpstream {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.parse().unwrap(),
            forwarded: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn forwarded(&self) -> Vec<DnsQuery> {
        self.forwarded.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamResolver for FixedUpstream {
    async fn forward(&self, query: &DnsQuery) -> Result<Vec<Record>, DomainError> {
        self.forwarded.lock().unwrap().push(query.clone());
        Ok(vec![Record::from_rdata(
            Name::from_str(&query.name).unwrap(),
            120,
            RData::A(A(self.address)),
        )])
    }
}
