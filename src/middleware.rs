//! axum adapters for [`Gatekeeper`](crate::Gatekeeper) and [`StatusRewriter`].
//!
//! ```ignore
//! let gatekeeper: SharedGatekeeper = Arc::new(Gatekeeper::new(options)?);
//! let app = Router::new()
//!     .route("/graphql", post(graphql))
//!     .layer(from_fn_with_state(gatekeeper.clone(), gatekeeper_middleware))
//!     .layer(from_fn(parse_json_body))
//!     .layer(from_fn(not_found_rewrite_middleware))
//!     .with_state(gatekeeper);
//! ```
//!
//! Layers added later run first, so `parse_json_body` above sees the
//! request before `gatekeeper_middleware` does.

use crate::constants::{content_type, header};
use crate::context::{RequestBody, RequestContext};
use crate::gatekeeper::Gatekeeper;
use crate::result::{Decision, Rejection};
use crate::rewrite::StatusRewriter;
use crate::util::contains_ignore_case;
use axum::{
    Json,
    body::Body,
    extract::{OriginalUri, Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header as http_header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;
use serde_json::{Value, json};
use std::error::Error as _;
use std::sync::Arc;
use tracing::debug;

pub type SharedGatekeeper = Arc<Gatekeeper>;

/// Upper bound for bodies buffered by [`parse_json_body`].
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// JSON body parsed by [`parse_json_body`], stored as a request extension.
#[derive(Debug, Clone)]
pub struct ParsedBody(pub Arc<Value>);

pub async fn gatekeeper_middleware(
    State(gatekeeper): State<SharedGatekeeper>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let context = owned_ctx.as_request_context();

    match gatekeeper.evaluate(&context) {
        Decision::Allow => next.run(request).await,
        Decision::Reject(rejection) => rejection_response(&rejection),
    }
}

/// Buffers `application/json` bodies and exposes them as [`ParsedBody`].
///
/// Bodies of other content types, empty bodies and malformed JSON are
/// forwarded untouched without an extension. A body over
/// [`DEFAULT_BODY_LIMIT`] gets `413`; any other read failure gets `400`.
pub async fn parse_json_body(request: Request, next: Next) -> Response {
    if !is_json_request(request.headers()) {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, DEFAULT_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(err) if is_length_limit(&err) => {
            debug!(error = %err, limit = DEFAULT_BODY_LIMIT, "request body over limit");
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(json!({ "error": "Request body is too large." })),
            )
                .into_response();
        }
        Err(err) => {
            debug!(error = %err, "failed to read request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Request body could not be read." })),
            )
                .into_response();
        }
    };

    if !bytes.is_empty() {
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => {
                parts.extensions.insert(ParsedBody(Arc::new(value)));
            }
            Err(err) => debug!(error = %err, "request body is not valid json"),
        }
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// Rewrites `403` responses from inner handlers into the `404` route-not-found envelope.
pub async fn not_found_rewrite_middleware(request: Request, next: Next) -> Response {
    let path = original_path(&request);
    let response = next.run(request).await;

    let Some(rewritten) = StatusRewriter::new().rewrite(response.status().as_u16(), &path) else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.status = StatusCode::from_u16(rewritten.status).unwrap_or(StatusCode::NOT_FOUND);
    parts.headers.remove(http_header::CONTENT_LENGTH);
    parts.headers.insert(
        http_header::CONTENT_TYPE,
        HeaderValue::from_static(content_type::APPLICATION_JSON),
    );

    Response::from_parts(parts, Body::from(rewritten.body.to_string()))
}

pub fn rejection_response(rejection: &Rejection) -> Response {
    let status = StatusCode::from_u16(rejection.status).unwrap_or(StatusCode::FORBIDDEN);
    (status, Json(rejection.body())).into_response()
}

fn is_length_limit(err: &axum::Error) -> bool {
    let mut cause = err.source();
    while let Some(current) = cause {
        if current.is::<LengthLimitError>() {
            return true;
        }
        cause = current.source();
    }
    false
}

fn is_json_request(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .map(|value| {
            contains_ignore_case(
                &String::from_utf8_lossy(value.as_bytes()),
                content_type::APPLICATION_JSON,
            )
        })
        .unwrap_or(false)
}

fn original_path(request: &Request) -> String {
    let uri = request
        .extensions()
        .get::<OriginalUri>()
        .map(|original| &original.0)
        .unwrap_or_else(|| request.uri());

    uri.path_and_query()
        .map(|value| value.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

struct OwnedRequestContext {
    method: String,
    path: String,
    origin: Option<String>,
    referer: Option<String>,
    content_type: Option<String>,
    body: Option<Arc<Value>>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            path: original_path(request),
            origin: header_value(headers, header::ORIGIN),
            referer: header_value(headers, header::REFERER),
            content_type: header_value(headers, header::CONTENT_TYPE),
            body: request
                .extensions()
                .get::<ParsedBody>()
                .map(|parsed| Arc::clone(&parsed.0)),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
            referer: self.referer.as_deref(),
            content_type: self.content_type.as_deref(),
            body: match &self.body {
                Some(value) => RequestBody::Parsed(value.as_ref()),
                None => RequestBody::Unparsed,
            },
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
