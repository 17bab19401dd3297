use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    response::IntoResponse,
};
use request_gatekeeper::middleware::ParsedBody;
use serde_json::{Value, json};

use crate::gatekeeper::AppState;

fn body_field(request: &Request, key: &str) -> Value {
    request
        .extensions()
        .get::<ParsedBody>()
        .and_then(|ParsedBody(value)| value.get(key).cloned())
        .unwrap_or(Value::Null)
}

pub async fn graphql(request: Request) -> impl IntoResponse {
    Json(json!({ "data": { "operation": body_field(&request, "operationName") } }))
}

pub async fn system(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "status": "ok", "service": state.service_name }))
}

pub async fn login(request: Request) -> impl IntoResponse {
    Json(json!({ "loggedIn": true, "email": body_field(&request, "email") }))
}

/// Always forbidden; the rewrite layer turns this into a `404`.
pub async fn admin() -> impl IntoResponse {
    (StatusCode::FORBIDDEN, Json(json!({ "error": "admins only" })))
}
