mod upstream_resolver;
mod workload_directory;

pub use upstream_resolver::UpstreamResolver;
pub use workload_directory::WorkloadDirectory;

// Re-export for convenience
pub use berth_dns_domain::{DnsQuery, Workload};
