use std::collections::HashSet;

/// Names that resolve to the address of whoever asked for them.
///
/// Built once at startup and never mutated afterwards. Entries and lookups
/// are compared case-insensitively and without a trailing `.`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalClients {
    names: HashSet<String>,
}

impl LocalClients {
    /// Parses a comma-separated list such as `dns,nginx`.
    pub fn parse(list: &str) -> Self {
        Self::from_names(list.split(','))
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| Self::normalize(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        if self.names.is_empty() {
            return false;
        }
        let name = Self::normalize(name);
        !name.is_empty() && self.names.contains(&name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    fn normalize(name: &str) -> String {
        let name = name.trim();
        name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase()
    }
}
