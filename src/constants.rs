pub mod header {
    pub const ORIGIN: &str = "Origin";
    pub const REFERER: &str = "Referer";
    pub const CONTENT_TYPE: &str = "Content-Type";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";

    /// Methods that never alter server state and bypass origin checks.
    pub const SAFE: [&str; 3] = [GET, HEAD, OPTIONS];
}

pub mod content_type {
    pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
    pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
    pub const TEXT_PLAIN: &str = "text/plain";
    pub const APPLICATION_JSON: &str = "application/json";

    /// Content types a browser sends cross-origin without a preflight.
    pub const FORM_LIKE: [&str; 3] = [FORM_URLENCODED, MULTIPART_FORM_DATA, TEXT_PLAIN];
}

pub mod route {
    pub const GRAPHQL: &str = "/graphql";
    pub const AUTH_LOGIN: &str = "/auth/login";
}

pub mod property {
    pub const GRAPHQL: [&str; 3] = ["query", "variables", "operationName"];
    pub const AUTH_LOGIN: [&str; 3] = ["email", "password", "mode"];
}

pub mod message {
    pub const UNAUTHORIZED_ORIGIN: &str = "Access denied: unauthorized origin.";
    pub const INVALID_PROPERTIES: &str = "Request contains invalid properties.";
    pub const INVALID_ENDPOINT: &str = "Invalid endpoint.";
    pub const NOT_FOUND: &str = "Not found.";
    pub const ROUTE_NOT_FOUND_CODE: &str = "ROUTE_NOT_FOUND";
}

pub mod status {
    pub const BAD_REQUEST: u16 = 400;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
}
