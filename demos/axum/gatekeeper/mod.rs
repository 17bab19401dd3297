use std::sync::Arc;

use request_gatekeeper::{ConfigError, Gatekeeper, GatekeeperConfig, middleware::SharedGatekeeper};

#[derive(Clone)]
pub struct AppState {
    pub gatekeeper: SharedGatekeeper,
    pub service_name: &'static str,
}

/// Reads `ALLOWED_ORIGINS`, `PUBLIC_URL`, `GRAPHQL_ROUTE` and
/// `AUTH_LOGIN_ROUTE` from the process environment.
pub fn build_state() -> Result<AppState, ConfigError> {
    let options = GatekeeperConfig::from_env().into_options()?;
    let gatekeeper = Arc::new(Gatekeeper::new(options)?);

    Ok(AppState {
        gatekeeper,
        service_name: "axum-gatekeeper-demo",
    })
}
