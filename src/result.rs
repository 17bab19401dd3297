use crate::constants::{message, status};
use serde_json::{Value, json};
use std::fmt;

/// Outcome of evaluating a request against one check or the whole gatekeeper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Reject(Rejection),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Decision::Allow => None,
            Decision::Reject(rejection) => Some(rejection),
        }
    }

    pub(crate) fn reject(reason: RejectionReason) -> Self {
        Decision::Reject(Rejection::new(reason))
    }
}

/// A final, non-retryable refusal carrying the HTTP status and JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: u16,
    pub reason: RejectionReason,
}

impl Rejection {
    pub fn new(reason: RejectionReason) -> Self {
        Self {
            status: reason.status(),
            reason,
        }
    }

    /// `{ "error": "<message>" }`
    pub fn body(&self) -> Value {
        json!({ "error": self.reason.message() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    UnauthorizedOrigin,
    CrossSiteForm { method: String },
    InvalidProperties,
    InvalidEndpoint,
}

impl RejectionReason {
    pub fn status(&self) -> u16 {
        match self {
            RejectionReason::UnauthorizedOrigin | RejectionReason::CrossSiteForm { .. } => {
                status::FORBIDDEN
            }
            RejectionReason::InvalidProperties | RejectionReason::InvalidEndpoint => {
                status::BAD_REQUEST
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            RejectionReason::UnauthorizedOrigin => message::UNAUTHORIZED_ORIGIN.to_string(),
            RejectionReason::CrossSiteForm { method } => {
                format!("Cross-site {method} form submissions are forbidden")
            }
            RejectionReason::InvalidProperties => message::INVALID_PROPERTIES.to_string(),
            RejectionReason::InvalidEndpoint => message::INVALID_ENDPOINT.to_string(),
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RejectionReason::UnauthorizedOrigin => "unauthorized_origin",
            RejectionReason::CrossSiteForm { .. } => "cross_site_form",
            RejectionReason::InvalidProperties => "invalid_properties",
            RejectionReason::InvalidEndpoint => "invalid_endpoint",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
