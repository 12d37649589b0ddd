//! Berth DNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod local_clients;
pub mod resolution;
pub mod workload;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use local_clients::LocalClients;
pub use resolution::ResolutionDecision;
pub use workload::{Workload, WorkloadStatus, MIN_ID_PREFIX_LEN};
