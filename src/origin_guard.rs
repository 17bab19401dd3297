use crate::constants::{content_type, method};
use crate::context::RequestContext;
use crate::origin::{AllowedOrigins, source_hostname};
use crate::result::{Decision, RejectionReason};
use crate::util::{contains_ignore_case, equals_ignore_case};
use tracing::{debug, warn};

/// Settings for [`OriginGuard`].
#[derive(Debug, Clone, Default)]
pub struct OriginOptions {
    /// Allowlist mode when non-empty, CSRF mode when empty.
    pub allowed_origins: AllowedOrigins,
    /// Canonical base URL of this service, compared verbatim with `Origin`.
    pub public_url: String,
}

/// Origin and CSRF check for state-changing requests.
///
/// Safe methods always pass. With a non-empty allowlist the hostname of
/// `Origin` (or `Referer` when `Origin` is absent) must be on the list.
/// With an empty allowlist, cross-site requests that look like HTML form
/// submissions are refused.
#[derive(Debug, Clone)]
pub struct OriginGuard {
    options: OriginOptions,
}

impl OriginGuard {
    pub fn new(options: OriginOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OriginOptions {
        &self.options
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> Decision {
        if is_safe_method(request.method) {
            return Decision::Allow;
        }

        if self.options.allowed_origins.is_empty() {
            self.evaluate_csrf(request)
        } else {
            self.evaluate_allowlist(request)
        }
    }

    fn evaluate_allowlist(&self, request: &RequestContext<'_>) -> Decision {
        let Some(source) = request.origin.or(request.referer) else {
            debug!(
                method = request.method,
                path = request.path,
                "no origin or referer, trusting server-to-server request"
            );
            return Decision::Allow;
        };

        let allowed = source_hostname(source)
            .map(|host| self.options.allowed_origins.contains_host(&host))
            .unwrap_or(false);

        if allowed {
            Decision::Allow
        } else {
            warn!(
                method = request.method,
                path = request.path,
                source,
                "rejecting request from unauthorized origin"
            );
            Decision::reject(RejectionReason::UnauthorizedOrigin)
        }
    }

    fn evaluate_csrf(&self, request: &RequestContext<'_>) -> Decision {
        let Some(origin) = request.origin else {
            debug!(
                method = request.method,
                path = request.path,
                "no origin header, trusting server-to-server request"
            );
            return Decision::Allow;
        };

        if origin == self.options.public_url {
            return Decision::Allow;
        }

        let suspicious = match request.content_type {
            Some(value) => is_form_content_type(value),
            None => true,
        };

        if suspicious {
            warn!(
                method = request.method,
                path = request.path,
                origin,
                content_type = request.content_type,
                "rejecting cross-site form submission"
            );
            Decision::reject(RejectionReason::CrossSiteForm {
                method: request.method.to_string(),
            })
        } else {
            Decision::Allow
        }
    }
}

pub fn is_safe_method(value: &str) -> bool {
    method::SAFE
        .iter()
        .any(|safe| equals_ignore_case(safe, value))
}

pub fn is_form_content_type(value: &str) -> bool {
    content_type::FORM_LIKE
        .iter()
        .any(|form| contains_ignore_case(value, form))
}

#[cfg(test)]
#[path = "origin_guard_test.rs"]
mod origin_guard_test;
