use std::net::{IpAddr, SocketAddr};

/// Outcome of classifying one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionDecision {
    /// The name identifies a running workload; answer with the master address.
    WorkloadMatch { address: IpAddr },

    /// The name is an allowlisted local client; answer with the caller's address.
    LocalClientMatch { address: IpAddr },

    /// No local rule applies; forward the question upstream.
    Delegate,
}

impl ResolutionDecision {
    pub fn address(&self) -> Option<IpAddr> {
        match self {
            ResolutionDecision::WorkloadMatch { address }
            | ResolutionDecision::LocalClientMatch { address } => Some(*address),
            ResolutionDecision::Delegate => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionDecision::WorkloadMatch { .. } => "WORKLOAD",
            ResolutionDecision::LocalClientMatch { .. } => "LOCAL_CLIENT",
            ResolutionDecision::Delegate => "UPSTREAM",
        }
    }
}

/// Address of the caller as it should appear in an answer record.
///
/// IPv4 clients reaching a dual-stack socket show up as `::ffff:a.b.c.d`;
/// those are reported as plain IPv4.
pub fn observed_address(caller: SocketAddr) -> IpAddr {
    caller.ip().to_canonical()
}
