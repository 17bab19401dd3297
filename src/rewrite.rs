use crate::constants::{message, status};
use serde_json::{Value, json};

/// Replacement for a response whose status was rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct RewrittenResponse {
    pub status: u16,
    pub body: Value,
}

/// Turns `403 Forbidden` responses into `404 Not Found` so that
/// access-controlled routes are indistinguishable from missing ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusRewriter;

impl StatusRewriter {
    pub fn new() -> Self {
        Self
    }

    /// Returns the replacement for `status`, or `None` to keep the response as is.
    pub fn rewrite(&self, response_status: u16, path: &str) -> Option<RewrittenResponse> {
        if response_status != status::FORBIDDEN {
            return None;
        }

        Some(RewrittenResponse {
            status: status::NOT_FOUND,
            body: not_found_body(path),
        })
    }
}

pub fn not_found_body(path: &str) -> Value {
    json!({
        "errors": [{
            "message": message::NOT_FOUND,
            "extensions": {
                "code": message::ROUTE_NOT_FOUND_CODE,
                "path": path,
            },
        }],
    })
}

#[cfg(test)]
#[path = "rewrite_test.rs"]
mod rewrite_test;
