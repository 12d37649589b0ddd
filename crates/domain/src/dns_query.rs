use super::RecordType;
use std::sync::Arc;

/// One question taken from an inbound message.
///
/// `name` keeps the form seen on the wire (usually dot-terminated); matching
/// against local state uses [`DnsQuery::normalized_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }

    /// The name with exactly one trailing `.` removed.
    pub fn normalized_name(&self) -> &str {
        self.name.strip_suffix('.').unwrap_or(&self.name)
    }

    /// True when the question may be answered from workloads or local clients.
    pub fn is_locally_resolvable(&self) -> bool {
        !self.normalized_name().is_empty() && self.record_type.is_address()
    }
}
