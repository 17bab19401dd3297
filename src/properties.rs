use crate::constants::property;
use crate::context::{RequestBody, RequestContext};
use crate::result::{Decision, RejectionReason};
use crate::util::is_within_route;
use indexmap::IndexSet;
use serde_json::Value;
use tracing::{debug, warn};

/// Rejects request bodies carrying keys outside a fixed set, on one route.
///
/// The check only sees bodies the host has already parsed. When the body
/// is [`RequestBody::Unparsed`] it passes the request through untouched, so
/// body parsing has to run before this check in the pipeline.
#[derive(Debug, Clone)]
pub struct PropertyAllowlist {
    route: String,
    allowed: IndexSet<String>,
}

impl PropertyAllowlist {
    pub fn new<R, I, S>(route: R, allowed: I) -> Self
    where
        R: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            route: route.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// `query`, `variables`, `operationName`
    pub fn graphql<R: Into<String>>(route: R) -> Self {
        Self::new(route, property::GRAPHQL)
    }

    /// `email`, `password`, `mode`
    pub fn auth_login<R: Into<String>>(route: R) -> Self {
        Self::new(route, property::AUTH_LOGIN)
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn allowed(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    pub fn applies_to(&self, request: &RequestContext<'_>) -> bool {
        is_within_route(request.route_path(), &self.route)
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> Decision {
        if !self.applies_to(request) {
            return Decision::Allow;
        }

        let body = match request.body {
            RequestBody::Parsed(body) => body,
            RequestBody::Unparsed => {
                debug!(
                    path = request.path,
                    route = %self.route,
                    "body not parsed, skipping property check"
                );
                return Decision::Allow;
            }
        };

        match self.first_unknown_key(body) {
            None => Decision::Allow,
            Some(key) => {
                warn!(
                    method = request.method,
                    path = request.path,
                    property = key,
                    "rejecting request with unexpected body property"
                );
                Decision::reject(RejectionReason::InvalidProperties)
            }
        }
    }

    fn first_unknown_key<'b>(&self, body: &'b Value) -> Option<&'b str> {
        match body {
            Value::Null => None,
            Value::Array(items) if items.is_empty() => None,
            Value::Object(map) => map
                .keys()
                .map(String::as_str)
                .find(|key| !self.allowed.contains(*key)),
            _ => Some("<non-object body>"),
        }
    }
}

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;
