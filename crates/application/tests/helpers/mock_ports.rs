#![allow(dead_code)]

use async_trait::async_trait;
use berth_dns_application::ports::{UpstreamResolver, WorkloadDirectory};
use berth_dns_domain::{DnsQuery, DomainError, RecordType, Workload, WorkloadStatus};
use hickory_proto::rr::rdata::{A, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::collections::HashMap;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockWorkloadDirectory {
    workloads: Arc<RwLock<Vec<Workload>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<AtomicUsize>,
}

impl MockWorkloadDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workloads(workloads: Vec<Workload>) -> Self {
        let directory = Self::new();
        directory.set_workloads(workloads);
        directory
    }

    pub fn set_workloads(&self, workloads: Vec<Workload>) {
        *self.workloads.write().unwrap() = workloads;
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().unwrap() = should_fail;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WorkloadDirectory for MockWorkloadDirectory {
    async fn list_running_workloads(&self) -> Result<Vec<Workload>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if *self.should_fail.read().unwrap() {
            return Err(DomainError::RuntimeUnavailable {
                endpoint: "unix:///var/run/docker.sock".to_string(),
                reason: "connection refused".to_string(),
            });
        }

        Ok(self.workloads.read().unwrap().clone())
    }
}

/// Upstream stub returning a fixed answer set per (name, type).
#[derive(Clone, Default)]
pub struct MockUpstreamResolver {
    responses: Arc<RwLock<HashMap<(String, u16), Vec<Record>>>>,
    should_fail: Arc<RwLock<bool>>,
    forwarded: Arc<RwLock<Vec<DnsQuery>>>,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, name: &str, record_type: RecordType, answers: Vec<Record>) {
        self.responses
            .write()
            .unwrap()
            .insert((name.to_string(), record_type.to_u16()), answers);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().unwrap() = should_fail;
    }

    pub fn forwarded(&self) -> Vec<DnsQuery> {
        self.forwarded.read().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn forward(&self, query: &DnsQuery) -> Result<Vec<Record>, DomainError> {
        self.forwarded.write().unwrap().push(query.clone());

        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Transport {
                server: "223.5.5.5".to_string(),
                reason: "connection reset".to_string(),
            });
        }

        Ok(self
            .responses
            .read()
            .unwrap()
            .get(&(query.name.to_string(), query.record_type.to_u16()))
            .cloned()
            .unwrap_or_default())
    }
}

pub const WEB_ID: &str = "abc123def4567890abc123def4567890abc123def4567890abc123def4567890";

pub fn running(id: &str, aliases: &[&str]) -> Workload {
    Workload::new(
        id,
        WorkloadStatus::Running,
        aliases.iter().map(|a| a.to_string()).collect(),
    )
}

pub fn stopped(id: &str, aliases: &[&str]) -> Workload {
    Workload::new(
        id,
        WorkloadStatus::Exited,
        aliases.iter().map(|a| a.to_string()).collect(),
    )
}

pub fn a_record(name: &str, ip: &str, ttl: u32) -> Record {
    Record::from_rdata(
        Name::from_str(name).unwrap(),
        ttl,
        RData::A(A(ip.parse().unwrap())),
    )
}

pub fn txt_record(name: &str, text: &str) -> Record {
    Record::from_rdata(
        Name::from_str(name).unwrap(),
        300,
        RData::TXT(TXT::new(vec![text.to_string()])),
    )
}

pub fn record_address(record: &Record) -> Option<IpAddr> {
    match record.data() {
        RData::A(a) => Some(IpAddr::V4(a.0)),
        RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
        _ => None,
    }
}
