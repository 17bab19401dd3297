mod gatekeeper;
mod routes;

use std::net::SocketAddr;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use request_gatekeeper::middleware::{
    gatekeeper_middleware, not_found_rewrite_middleware, parse_json_body,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "axum=info,request_gatekeeper=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_state = gatekeeper::build_state()?;
    let shared = app_state.gatekeeper.clone();

    let app = Router::new()
        .route("/graphql", post(routes::graphql))
        .route("/graphql/system", get(routes::system))
        .route("/auth/login", post(routes::login))
        .route("/admin", get(routes::admin))
        .layer(from_fn_with_state(shared, gatekeeper_middleware))
        .layer(from_fn(parse_json_body))
        .layer(from_fn(not_found_rewrite_middleware))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse()?;
    tracing::info!(%addr, "axum gatekeeper demo listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
