use std::fmt;
use std::str::FromStr;

/// Shortest identifier prefix accepted as a workload match.
pub const MIN_ID_PREFIX_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkloadStatus {
    Created,
    Running,
    Paused,
    Restarting,
    Removing,
    Exited,
    Dead,
    Unknown,
}

impl WorkloadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadStatus::Created => "created",
            WorkloadStatus::Running => "running",
            WorkloadStatus::Paused => "paused",
            WorkloadStatus::Restarting => "restarting",
            WorkloadStatus::Removing => "removing",
            WorkloadStatus::Exited => "exited",
            WorkloadStatus::Dead => "dead",
            WorkloadStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for WorkloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkloadStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "created" => WorkloadStatus::Created,
            "running" => WorkloadStatus::Running,
            "paused" => WorkloadStatus::Paused,
            "restarting" => WorkloadStatus::Restarting,
            "removing" => WorkloadStatus::Removing,
            "exited" => WorkloadStatus::Exited,
            "dead" => WorkloadStatus::Dead,
            _ => WorkloadStatus::Unknown,
        })
    }
}

/// A container as reported by the runtime inventory.
///
/// Aliases are kept exactly as the runtime reports them, i.e. with the
/// leading `/` (`/web`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub id: String,
    pub status: WorkloadStatus,
    pub aliases: Vec<String>,
}

impl Workload {
    pub fn new(id: impl Into<String>, status: WorkloadStatus, aliases: Vec<String>) -> Self {
        Self {
            id: id.into(),
            status,
            aliases,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == WorkloadStatus::Running
    }

    /// Whether `name` (already normalized) identifies this workload.
    ///
    /// Rules, in order: full identifier, identifier prefix of at least
    /// [`MIN_ID_PREFIX_LEN`] characters, alias without its leading `/`.
    /// Non-running workloads never match.
    pub fn matches(&self, name: &str) -> bool {
        if name.is_empty() || !self.is_running() {
            return false;
        }

        if self.id.eq_ignore_ascii_case(name) {
            return true;
        }

        if name.len() >= MIN_ID_PREFIX_LEN
            && self
                .id
                .get(..name.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name))
        {
            return true;
        }

        self.aliases.iter().any(|alias| {
            let alias = alias.strip_prefix('/').unwrap_or(alias);
            !alias.is_empty() && alias.eq_ignore_ascii_case(name)
        })
    }

    /// First workload in inventory order matching `name`.
    pub fn find_match<'a>(workloads: &'a [Workload], name: &str) -> Option<&'a Workload> {
        workloads.iter().find(|workload| workload.matches(name))
    }

    /// Identifier truncated to the short form used in logs.
    pub fn short_id(&self) -> &str {
        self.id.get(..MIN_ID_PREFIX_LEN).unwrap_or(&self.id)
    }
}
