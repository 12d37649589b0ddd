use crate::ports::{UpstreamResolver, WorkloadDirectory};
use crate::services::{AnswerBuilder, WorkloadMatcherService};
use berth_dns_domain::resolution::observed_address;
use berth_dns_domain::{DnsQuery, LocalClients, ResolutionDecision};
use hickory_proto::rr::Record;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

const DEFAULT_ANSWER_TTL: u32 = 3600;

/// Decides how each question is answered: master address for running
/// workloads, caller address for allowlisted local clients, upstream for
/// everything else.
///
/// Only the first question of a message is ever resolved. Every branch
/// (workload, local client, upstream) ends processing of the message, so
/// later questions never contribute answers.
pub struct ResolveQueryUseCase {
    matcher: WorkloadMatcherService,
    upstream: Arc<dyn UpstreamResolver>,
    local_clients: Arc<LocalClients>,
    master_address: IpAddr,
    answer_ttl: u32,
}

impl ResolveQueryUseCase {
    pub fn new(
        directory: Arc<dyn WorkloadDirectory>,
        upstream: Arc<dyn UpstreamResolver>,
        local_clients: Arc<LocalClients>,
        master_address: IpAddr,
    ) -> Self {
        Self {
            matcher: WorkloadMatcherService::new(directory),
            upstream,
            local_clients,
            master_address,
            answer_ttl: DEFAULT_ANSWER_TTL,
        }
    }

    pub fn with_answer_ttl(mut self, answer_ttl: u32) -> Self {
        self.answer_ttl = answer_ttl;
        self
    }

    /// Answer records for a message's questions.
    pub async fn execute(&self, queries: &[DnsQuery], caller: SocketAddr) -> Vec<Record> {
        let Some(query) = queries.first() else {
            return vec![];
        };

        if queries.len() > 1 {
            debug!(
                ignored = queries.len() - 1,
                "Only the first question of the message is resolved"
            );
        }

        self.resolve(query, caller).await
    }

    /// Answer records for one question.
    ///
    /// Never fails: directory and upstream errors are logged and turn into
    /// "no match" and "no answers" respectively.
    pub async fn resolve(&self, query: &DnsQuery, caller: SocketAddr) -> Vec<Record> {
        let start = Instant::now();
        info!(
            domain = %query.name,
            record_type = %query.record_type,
            client = %caller,
            "DNS query received"
        );

        let decision = self.classify(query, caller).await;

        if let Some(address) = decision.address() {
            match AnswerBuilder::address_record(
                &query.name,
                query.record_type,
                address,
                self.answer_ttl,
            ) {
                Ok(record) => {
                    info!(
                        domain = %query.name,
                        address = %address,
                        source = decision.as_str(),
                        elapsed_us = start.elapsed().as_micros() as u64,
                        "Answered locally"
                    );
                    return vec![record];
                }
                Err(e) => {
                    warn!(
                        domain = %query.name,
                        source = decision.as_str(),
                        error = %e,
                        "Dropping malformed local answer, delegating upstream"
                    );
                }
            }
        }

        let answers = self.delegate(query).await;
        debug!(
            domain = %query.name,
            answers = answers.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Upstream delegation finished"
        );
        answers
    }

    /// Pick a resolution strategy without building any records.
    pub async fn classify(&self, query: &DnsQuery, caller: SocketAddr) -> ResolutionDecision {
        if !query.is_locally_resolvable() {
            return ResolutionDecision::Delegate;
        }

        let name = query.normalized_name();

        match self.matcher.find_running(name).await {
            Ok(Some(workload)) => {
                debug!(domain = %name, workload = workload.short_id(), "Workload match");
                return ResolutionDecision::WorkloadMatch {
                    address: self.master_address,
                };
            }
            Ok(None) => {}
            Err(e) => {
                warn!(
                    domain = %name,
                    error = %e,
                    "Workload directory lookup failed, treating as no match"
                );
            }
        }

        if self.local_clients.contains(&query.name) {
            return ResolutionDecision::LocalClientMatch {
                address: observed_address(caller),
            };
        }

        ResolutionDecision::Delegate
    }

    async fn delegate(&self, query: &DnsQuery) -> Vec<Record> {
        match self.upstream.forward(query).await {
            Ok(answers) => answers,
            Err(e) => {
                warn!(
                    domain = %query.name,
                    record_type = %query.record_type,
                    error = %e,
                    "Upstream delegation failed, replying without answers"
                );
                vec![]
            }
        }
    }
}
