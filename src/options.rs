use crate::constants::route;
use crate::endpoint::PatternError;
use crate::origin::AllowedOrigins;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct GatekeeperOptions {
    pub allowed_origins: AllowedOrigins,
    pub public_url: String,
    pub graphql_route: String,
    pub auth_login_route: String,
}

impl Default for GatekeeperOptions {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::none(),
            public_url: String::new(),
            graphql_route: route::GRAPHQL.into(),
            auth_login_route: route::AUTH_LOGIN.into(),
        }
    }
}

impl GatekeeperOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_route("graphql_route", &self.graphql_route)?;
        validate_route("auth_login_route", &self.auth_login_route)?;
        Ok(())
    }
}

fn validate_route(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim_end_matches('/').is_empty() || !value.starts_with('/') {
        return Err(ValidationError::InvalidRoute {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field} must be an absolute path below the root, got `{value}`")]
    InvalidRoute { field: &'static str, value: String },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
