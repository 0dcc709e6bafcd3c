use std::time::Duration;

use http::{HeaderMap, Method};

use crate::body::Body;
use crate::error::ClientError;

/// HTTP request with method, path, headers, query, and body.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    body: Body,
    timeout: Option<Duration>,
}

/// Configuration for a [`Request`], passed by value to [`Request::new`].
///
/// Every field has a safe default, so callers name only what they need:
///
/// ```
/// use courier_client::{Body, Method, Request, RequestConfig};
///
/// let request = Request::new(
///     "/items",
///     RequestConfig {
///         method: Method::POST,
///         body: Body::from("payload"),
///         ..RequestConfig::default()
///     },
/// );
/// assert_eq!(request.method(), &Method::POST);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// HTTP method; defaults to `GET`.
    pub method: Method,
    /// Headers for this request; they take precedence over the
    /// connector-wide headers on dispatch.
    pub headers: HeaderMap,
    /// Query parameters, percent-encoded in order on dispatch.
    pub query: Vec<(String, String)>,
    /// Request body; defaults to empty.
    pub body: Body,
    /// Per-request timeout override.
    pub timeout: Option<Duration>,
}

impl Request {
    /// Create a request for `path` with the given configuration.
    pub fn new(path: impl Into<String>, config: RequestConfig) -> Self {
        Self {
            method: config.method,
            path: path.into(),
            headers: config.headers,
            query: config.query,
            body: config.body,
            timeout: config.timeout,
        }
    }

    /// GET request for `path` with the default configuration.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path, RequestConfig::default())
    }

    /// Get the HTTP method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the request path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the request headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the query parameters
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Get the request body
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Take the request body
    pub fn into_body(self) -> Body {
        self.body
    }

    /// Get the per-request timeout override
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Percent-encoded query string; empty when no parameters are set.
    ///
    /// # Errors
    /// Returns [`ClientError::Serialization`] when a parameter cannot be
    /// encoded.
    pub fn query_string(&self) -> Result<String, ClientError> {
        if self.query.is_empty() {
            return Ok(String::new());
        }
        serde_urlencoded::to_string(&self.query)
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }
}
