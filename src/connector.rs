use std::time::Duration;

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};

use crate::body::Body;
use crate::decoder::APPLICATION_JSON;
use crate::error::ClientError;
use crate::request::Request;
use crate::response::{Response, ResponseParts};
use crate::uri::Uri;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`Connector`], passed by value to
/// [`Connector::from_config`].
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    /// Base URL every request path is appended to.
    pub base_url: String,
    /// Headers sent with every request; request headers take precedence.
    pub headers: HeaderMap,
    /// Connector-wide timeout; individual requests may override it.
    pub timeout: Duration,
}

impl ConnectorConfig {
    /// Configuration with no default headers and a 30 second timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: HeaderMap::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the connector-wide timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a header sent with every request.
    ///
    /// # Errors
    /// Returns [`ClientError::Build`] when the name or value is not a
    /// valid header.
    pub fn with_header<K, V>(mut self, key: K, value: V) -> Result<Self, ClientError>
    where
        K: TryInto<HeaderName>,
        V: TryInto<HeaderValue>,
        K::Error: std::fmt::Display,
        V::Error: std::fmt::Display,
    {
        let key = key
            .try_into()
            .map_err(|e| ClientError::Build(format!("invalid header name: {e}")))?;
        let value = value
            .try_into()
            .map_err(|e| ClientError::Build(format!("invalid header value: {e}")))?;
        self.headers.append(key, value);
        Ok(self)
    }
}

/// HTTP transport that executes [`Request`]s against a base URL and
/// captures every completed exchange as a [`Response`].
pub struct Connector {
    base_url: String,
    headers: HeaderMap,
    http: reqwest::Client,
}

impl Connector {
    /// Create a connector from configuration.
    ///
    /// # Errors
    /// Returns [`ClientError::Build`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn from_config(config: ConnectorConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            headers: config.headers,
            http,
        })
    }

    /// Connector with the default configuration for `base_url`.
    ///
    /// # Errors
    /// See [`from_config`](Self::from_config).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(ConnectorConfig::new(base_url))
    }

    /// The base URL requests are dispatched against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a request and capture the completed exchange.
    ///
    /// # Errors
    /// [`ClientError::Uri`] when the composed URL is malformed (checked
    /// before any I/O); [`ClientError::Timeout`] / [`ClientError::Connection`]
    /// / [`ClientError::Reqwest`] when the transport fails; and
    /// [`ClientError::BodyRead`] when the response body cannot be drained —
    /// that variant carries the partially captured response.
    pub async fn execute(&self, request: Request) -> Result<Response, ClientError> {
        let query = request.query_string()?;
        let url = if query.is_empty() {
            format!("{}{}", self.base_url, request.path())
        } else {
            format!("{}{}?{}", self.base_url, request.path(), query)
        };

        // A malformed URL is fatal here, before any I/O happens.
        let request_uri = Uri::parse(&url)?;

        // Merge connector headers with request headers; for any key the
        // request sets, its values replace the connector's.
        let mut headers = self.headers.clone();
        for key in request.headers().keys() {
            headers.remove(key);
        }
        for (name, value) in request.headers() {
            headers.append(name.clone(), value.clone());
        }
        if !request.body().is_empty() && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }

        let method = request.method().clone();
        let request_body = request.body().as_bytes().cloned();

        let mut builder = self
            .http
            .request(method.clone(), url.as_str())
            .headers(headers.clone());
        if let Some(timeout) = request.timeout() {
            builder = builder.timeout(timeout);
        }
        builder = match request.into_body() {
            Body::Empty => builder,
            Body::Bytes(bytes) => builder.body(bytes),
        };

        debug!(%method, url = %request_uri, "dispatching request");

        let resp = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(e.to_string())
            } else if e.is_connect() {
                ClientError::Connection(e.to_string())
            } else {
                ClientError::Reqwest(e)
            }
        })?;

        let parts = ResponseParts {
            status: resp.status(),
            method,
            headers: resp.headers().clone(),
            request_headers: headers,
            request_uri,
            request_body,
        };

        // Drain the body fully, exactly once. A read failure is fatal to
        // the capture; the partial response travels with the error.
        match resp.bytes().await {
            Ok(data) => Ok(Response::from_parts(parts, Some(data))),
            Err(e) => {
                warn!(error = %e, "failed to read response body");
                Err(ClientError::BodyRead {
                    source: e,
                    response: Box::new(Response::from_parts(parts, None)),
                })
            }
        }
    }

    /// GET convenience for `path` with the default request configuration.
    ///
    /// # Errors
    /// See [`execute`](Self::execute).
    pub async fn send(&self, path: &str) -> Result<Response, ClientError> {
        self.execute(Request::get(path)).await
    }

    /// Blocking version of [`execute`](Self::execute) for sync contexts.
    ///
    /// Uses the current tokio runtime if one is available, or creates a
    /// temporary runtime when called from a non-async context.
    ///
    /// # Errors
    /// See [`execute`](Self::execute); additionally [`ClientError::Io`]
    /// when a temporary runtime cannot be created.
    pub fn execute_blocking(&self, request: Request) -> Result<Response, ClientError> {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle.block_on(self.execute(request)),
            Err(_) => tokio::runtime::Runtime::new()?.block_on(self.execute(request)),
        }
    }

    /// Blocking version of [`send`](Self::send).
    ///
    /// # Errors
    /// See [`execute_blocking`](Self::execute_blocking).
    pub fn send_blocking(&self, path: &str) -> Result<Response, ClientError> {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle.block_on(self.send(path)),
            Err(_) => tokio::runtime::Runtime::new()?.block_on(self.send(path)),
        }
    }
}
