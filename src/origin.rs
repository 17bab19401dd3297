use indexmap::IndexSet;
use std::fmt;
use url::Url;

/// A single configured allowed origin.
///
/// Entries are accepted in two forms. A value that parses as a URL with a
/// host (`https://app.example.com:8443`) is matched by hostname, ignoring
/// scheme and port. Anything else (`app.example.com`) is matched by plain
/// string equality against the request hostname.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OriginEntry {
    Url { raw: String, host: String },
    Host(String),
}

impl OriginEntry {
    pub fn parse<S: Into<String>>(value: S) -> Self {
        let raw = value.into();
        match Url::parse(&raw)
            .ok()
            .and_then(|url| url.host_str().map(str::to_owned))
        {
            Some(host) => OriginEntry::Url { raw, host },
            None => OriginEntry::Host(raw),
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            OriginEntry::Url { raw, .. } => raw,
            OriginEntry::Host(raw) => raw,
        }
    }

    pub fn matches_host(&self, hostname: &str) -> bool {
        match self {
            OriginEntry::Url { host, .. } => host == hostname,
            OriginEntry::Host(raw) => raw == hostname,
        }
    }
}

impl fmt::Display for OriginEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

impl From<&str> for OriginEntry {
    fn from(value: &str) -> Self {
        OriginEntry::parse(value)
    }
}

impl From<String> for OriginEntry {
    fn from(value: String) -> Self {
        OriginEntry::parse(value)
    }
}

/// Ordered, de-duplicated set of allowed origins.
///
/// Built once at setup and never mutated afterwards. An empty set switches
/// the origin guard into CSRF mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedOrigins {
    entries: IndexSet<OriginEntry>,
}

impl AllowedOrigins {
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from individual values. Each value is trimmed; blanks are dropped.
    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let entries = values
            .into_iter()
            .filter_map(|value| {
                let trimmed = value.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(OriginEntry::parse(trimmed))
                }
            })
            .collect();

        Self { entries }
    }

    /// Build from the raw comma-delimited configuration form.
    pub fn parse_list(raw: &str) -> Self {
        Self::list(raw.split(','))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OriginEntry> {
        self.entries.iter()
    }

    pub fn contains_host(&self, hostname: &str) -> bool {
        self.entries.iter().any(|entry| entry.matches_host(hostname))
    }
}

impl<T: AsRef<str>> FromIterator<T> for AllowedOrigins {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::list(iter)
    }
}

/// Hostname of an `Origin`/`Referer` value, or `None` when it is not a URL with a host.
pub fn source_hostname(source: &str) -> Option<String> {
    let url = Url::parse(source).ok()?;
    url.host_str().map(str::to_owned)
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
