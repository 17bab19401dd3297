pub mod config;
pub mod constants;
mod context;
mod endpoint;
mod gatekeeper;
#[cfg(feature = "axum")]
pub mod middleware;
mod options;
mod origin;
mod origin_guard;
mod properties;
mod result;
mod rewrite;
mod util;

pub use config::{ConfigError, GatekeeperConfig};
pub use context::{RequestBody, RequestContext};
pub use endpoint::{EndpointGuard, PatternError};
pub use gatekeeper::Gatekeeper;
pub use options::{GatekeeperOptions, ValidationError};
pub use origin::{AllowedOrigins, OriginEntry, source_hostname};
pub use origin_guard::{OriginGuard, OriginOptions, is_form_content_type, is_safe_method};
pub use properties::PropertyAllowlist;
pub use result::{Decision, Rejection, RejectionReason};
pub use rewrite::{RewrittenResponse, StatusRewriter, not_found_body};
pub use util::{contains_ignore_case, equals_ignore_case, normalize_lower};
