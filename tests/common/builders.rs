use request_gatekeeper::constants::method;
use request_gatekeeper::{
    AllowedOrigins, Decision, Gatekeeper, GatekeeperOptions, OriginGuard, OriginOptions,
    RequestBody, RequestContext,
};
use serde_json::Value;

pub const PUBLIC_URL: &str = "https://cms.example.com";

#[derive(Default)]
pub struct GatekeeperBuilder {
    allowed_origins: Vec<String>,
    public_url: Option<String>,
    graphql_route: Option<String>,
    auth_login_route: Option<String>,
}

impl GatekeeperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowed_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = Some(url.into());
        self
    }

    pub fn graphql_route(mut self, route: impl Into<String>) -> Self {
        self.graphql_route = Some(route.into());
        self
    }

    pub fn auth_login_route(mut self, route: impl Into<String>) -> Self {
        self.auth_login_route = Some(route.into());
        self
    }

    fn into_options(self) -> GatekeeperOptions {
        let GatekeeperOptions {
            graphql_route: default_graphql_route,
            auth_login_route: default_auth_login_route,
            ..
        } = GatekeeperOptions::default();

        GatekeeperOptions {
            allowed_origins: AllowedOrigins::list(self.allowed_origins),
            public_url: self.public_url.unwrap_or_else(|| PUBLIC_URL.into()),
            graphql_route: self.graphql_route.unwrap_or(default_graphql_route),
            auth_login_route: self.auth_login_route.unwrap_or(default_auth_login_route),
        }
    }

    pub fn build_origin_guard(self) -> OriginGuard {
        let options = self.into_options();
        OriginGuard::new(OriginOptions {
            allowed_origins: options.allowed_origins,
            public_url: options.public_url,
        })
    }

    pub fn build(self) -> Gatekeeper {
        Gatekeeper::new(self.into_options()).expect("valid gatekeeper configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
    referer: Option<String>,
    content_type: Option<String>,
    body: Option<Value>,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            origin: None,
            referer: None,
            content_type: None,
            body: None,
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    fn with_context<T>(&self, f: impl FnOnce(&RequestContext<'_>) -> T) -> T {
        let ctx = RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
            referer: self.referer.as_deref(),
            content_type: self.content_type.as_deref(),
            body: match &self.body {
                Some(value) => RequestBody::Parsed(value),
                None => RequestBody::Unparsed,
            },
        };
        f(&ctx)
    }

    pub fn check(&self, gatekeeper: &Gatekeeper) -> Decision {
        self.with_context(|ctx| gatekeeper.evaluate(ctx))
    }

    pub fn check_origin(&self, guard: &OriginGuard) -> Decision {
        self.with_context(|ctx| guard.evaluate(ctx))
    }
}

pub fn gatekeeper() -> GatekeeperBuilder {
    GatekeeperBuilder::new()
}

pub fn request(method: impl Into<String>, path: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(method, path)
}

pub fn post(path: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(method::POST, path)
}

pub fn get(path: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(method::GET, path)
}
