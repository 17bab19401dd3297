use crate::context::RequestContext;
use crate::endpoint::EndpointGuard;
use crate::options::{GatekeeperOptions, ValidationError};
use crate::origin_guard::{OriginGuard, OriginOptions};
use crate::properties::PropertyAllowlist;
use crate::result::Decision;
use crate::rewrite::{RewrittenResponse, StatusRewriter};

/// Runs every request check in order and stops at the first rejection.
///
/// Order: origin/CSRF, GraphQL body properties, login body properties,
/// GraphQL sub-path. Holds only immutable configuration and can be shared
/// freely across threads.
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    origin: OriginGuard,
    graphql_properties: PropertyAllowlist,
    login_properties: PropertyAllowlist,
    endpoint: EndpointGuard,
    rewriter: StatusRewriter,
}

impl Gatekeeper {
    pub fn new(options: GatekeeperOptions) -> Result<Self, ValidationError> {
        options.validate()?;

        let GatekeeperOptions {
            allowed_origins,
            public_url,
            graphql_route,
            auth_login_route,
        } = options;

        let endpoint = EndpointGuard::new(graphql_route.as_str())?;

        Ok(Self {
            origin: OriginGuard::new(OriginOptions {
                allowed_origins,
                public_url,
            }),
            graphql_properties: PropertyAllowlist::graphql(graphql_route),
            login_properties: PropertyAllowlist::auth_login(auth_login_route),
            endpoint,
            rewriter: StatusRewriter::new(),
        })
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> Decision {
        let decision = self.origin.evaluate(request);
        if !decision.is_allowed() {
            return decision;
        }

        let decision = self.graphql_properties.evaluate(request);
        if !decision.is_allowed() {
            return decision;
        }

        let decision = self.login_properties.evaluate(request);
        if !decision.is_allowed() {
            return decision;
        }

        self.endpoint.evaluate(request)
    }

    pub fn rewrite_response(&self, status: u16, path: &str) -> Option<RewrittenResponse> {
        self.rewriter.rewrite(status, path)
    }

    pub fn origin_guard(&self) -> &OriginGuard {
        &self.origin
    }

    pub fn graphql_properties(&self) -> &PropertyAllowlist {
        &self.graphql_properties
    }

    pub fn login_properties(&self) -> &PropertyAllowlist {
        &self.login_properties
    }

    pub fn endpoint_guard(&self) -> &EndpointGuard {
        &self.endpoint
    }
}

#[cfg(test)]
#[path = "gatekeeper_test.rs"]
mod gatekeeper_test;
