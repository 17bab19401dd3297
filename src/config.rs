//! Process configuration read once from the hosting environment.

use crate::constants::route;
use crate::options::{GatekeeperOptions, ValidationError};
use crate::origin::AllowedOrigins;
use std::env;
use thiserror::Error;

pub const ALLOWED_ORIGINS_ENV: &str = "ALLOWED_ORIGINS";
pub const PUBLIC_URL_ENV: &str = "PUBLIC_URL";
pub const GRAPHQL_ROUTE_ENV: &str = "GRAPHQL_ROUTE";
pub const AUTH_LOGIN_ROUTE_ENV: &str = "AUTH_LOGIN_ROUTE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatekeeperConfig {
    /// Raw comma-delimited allowlist; empty selects CSRF mode.
    pub allowed_origins: String,
    pub public_url: String,
    pub graphql_route: String,
    pub auth_login_route: String,
}

impl GatekeeperConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            allowed_origins: lookup(ALLOWED_ORIGINS_ENV).unwrap_or_default(),
            public_url: lookup(PUBLIC_URL_ENV)
                .map(|value| value.trim().to_string())
                .unwrap_or_default(),
            graphql_route: lookup(GRAPHQL_ROUTE_ENV).unwrap_or_else(|| route::GRAPHQL.into()),
            auth_login_route: lookup(AUTH_LOGIN_ROUTE_ENV)
                .unwrap_or_else(|| route::AUTH_LOGIN.into()),
        }
    }

    pub fn into_options(self) -> Result<GatekeeperOptions, ConfigError> {
        let options = GatekeeperOptions {
            allowed_origins: AllowedOrigins::parse_list(&self.allowed_origins),
            public_url: self.public_url,
            graphql_route: self.graphql_route,
            auth_login_route: self.auth_login_route,
        };
        options.validate()?;

        if options.allowed_origins.is_empty() && options.public_url.is_empty() {
            tracing::warn!(
                "{} and {} are both unset, every cross-site form submission will be refused",
                ALLOWED_ORIGINS_ENV,
                PUBLIC_URL_ENV
            );
        }

        Ok(options)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid gatekeeper configuration: {0}")]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
