//! Plain-data HTTP types for the host-does-IO pattern.
//!
//! The client never touches the network: it builds `HttpRequest` values and
//! parses `HttpResponse` values, and the caller executes the round-trip in
//! between with whatever transport it has. All fields are owned so values
//! can be handed across threads or process boundaries freely.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A request described as data, produced by `EmployeeClient::build_*`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A response described as data, fed to `EmployeeClient::parse_*` after the
/// caller has executed the corresponding `HttpRequest`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
