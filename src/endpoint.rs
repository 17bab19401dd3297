use crate::context::RequestContext;
use crate::result::{Decision, RejectionReason};
use regex_automata::meta::{BuildError, Regex};
use thiserror::Error;
use tracing::warn;

const SYSTEM_SEGMENT: &str = "system";

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile endpoint pattern for route `{route}`")]
    Build {
        route: String,
        #[source]
        source: Box<BuildError>,
    },
}

/// Rejects sub-paths of the GraphQL route other than the `system` segment.
///
/// `/graphql` itself is not matched. `/graphql/system` and anything below it
/// pass; every other `/graphql/...` path is an invalid endpoint.
#[derive(Debug, Clone)]
pub struct EndpointGuard {
    route: String,
    subpath: Regex,
    exempt: Regex,
}

impl EndpointGuard {
    pub fn new<R: Into<String>>(route: R) -> Result<Self, PatternError> {
        let route = route.into();
        let base = regex_syntax::escape(route.trim_end_matches('/'));
        let subpath = compile(&route, &format!("^{base}/"))?;
        let exempt = compile(&route, &format!("^{base}/{SYSTEM_SEGMENT}(?:/|$)"))?;

        Ok(Self {
            route,
            subpath,
            exempt,
        })
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> Decision {
        let path = request.route_path();
        if self.subpath.is_match(path) && !self.exempt.is_match(path) {
            warn!(
                method = request.method,
                path = request.path,
                "rejecting request to unknown graphql endpoint"
            );
            return Decision::reject(RejectionReason::InvalidEndpoint);
        }

        Decision::Allow
    }
}

fn compile(route: &str, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|err| PatternError::Build {
        route: route.to_string(),
        source: Box::new(err),
    })
}

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;
