use serde_json::Value;

/// Borrowed view of the parts of an inbound request the checks read.
///
/// Header fields are `None` when the header is absent. `path` is the
/// original request path; a trailing query string is tolerated.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub origin: Option<&'a str>,
    pub referer: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub body: RequestBody<'a>,
}

/// Body as seen by the property checks.
///
/// The gatekeeper never parses a body itself. A host that wants the
/// property checks enforced must parse the body before evaluation and hand
/// it over as [`RequestBody::Parsed`]; anything else is [`RequestBody::Unparsed`].
#[derive(Debug, Clone, Copy, Default)]
pub enum RequestBody<'a> {
    #[default]
    Unparsed,
    Parsed(&'a Value),
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, path: &'a str) -> Self {
        Self {
            method,
            path,
            origin: None,
            referer: None,
            content_type: None,
            body: RequestBody::Unparsed,
        }
    }

    /// Path with any query string or fragment removed.
    pub fn route_path(&self) -> &'a str {
        let path = self.path;
        let end = path.find(['?', '#']).unwrap_or(path.len());
        &path[..end]
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
