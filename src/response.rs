use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::decoder::Decoder;
use crate::error::ClientError;
use crate::header;
use crate::uri::Uri;

/// Snapshot of a completed exchange, prior to body capture.
///
/// Produced by a transport — the built-in [`Connector`](crate::Connector)
/// or any external one — and finalized into a [`Response`] with
/// [`Response::from_parts`].
#[derive(Debug, Clone)]
pub struct ResponseParts {
    pub status: StatusCode,
    pub method: Method,
    pub headers: HeaderMap,
    pub request_headers: HeaderMap,
    pub request_uri: Uri,
    /// Raw payload of the originating request, if it carried one.
    pub request_body: Option<Bytes>,
}

/// One captured HTTP exchange.
///
/// Everything is snapshotted at construction: status, method, both header
/// stores, the request URI, a best-effort echo of the request body, and
/// the fully drained response body. The value never mutates afterwards,
/// and deserialization is a pure function of the captured data, so a
/// `Response` is safe to share between concurrent readers.
#[derive(Debug, Clone)]
pub struct Response {
    request_uri: Uri,
    status: StatusCode,
    method: Method,
    headers: HeaderMap,
    request_headers: HeaderMap,
    request_body: Option<serde_json::Value>,
    // `None` when the body was never captured (failed read); zero-length
    // `Some` is a legitimately empty body.
    data: Option<Bytes>,
}

impl Response {
    /// Finalize a captured exchange.
    ///
    /// `data` must be the fully drained response body, or `None` when the
    /// read failed; the accessors preserve the distinction. The
    /// request-body echo is decoded best-effort as JSON — it is
    /// diagnostic, not load-bearing, and an unparsable echo is dropped
    /// rather than failing the capture.
    pub fn from_parts(parts: ResponseParts, data: Option<Bytes>) -> Self {
        let request_body = parts
            .request_body
            .as_deref()
            .and_then(|raw| match serde_json::from_slice(raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    debug!(error = %e, "request body echo is not valid JSON, dropping");
                    None
                }
            });

        Self {
            request_uri: parts.request_uri,
            status: parts.status,
            method: parts.method,
            headers: parts.headers,
            request_headers: parts.request_headers,
            request_body,
            data,
        }
    }

    /// Whether the status code is in the 2xx range.
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    /// Get the HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the method of the originating request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the headers of the originating request
    pub fn request_headers(&self) -> &HeaderMap {
        &self.request_headers
    }

    /// Get the URI of the originating request
    pub fn request_uri(&self) -> &Uri {
        &self.request_uri
    }

    /// Best-effort JSON echo of the originating request's body, captured
    /// for observability; `None` when the request had no body or the body
    /// was not valid JSON.
    pub fn request_body(&self) -> Option<&serde_json::Value> {
        self.request_body.as_ref()
    }

    /// Joined textual value of a response header (case-insensitive key).
    pub fn header(&self, key: &str) -> Option<String> {
        header::joined(&self.headers, key)
    }

    /// Joined textual value of a request header (case-insensitive key).
    pub fn request_header(&self, key: &str) -> Option<String> {
        header::joined(&self.request_headers, key)
    }

    /// Raw response body. Empty both for an empty body and for a body
    /// that was never captured; use
    /// [`response_body_or_fail`](Self::response_body_or_fail) to
    /// distinguish the two.
    pub fn response_body(&self) -> Bytes {
        self.data.clone().unwrap_or_default()
    }

    /// Raw response body, or an error when there is nothing to return.
    ///
    /// # Errors
    /// [`ClientError::BodyUnavailable`] when the body was never captured,
    /// [`ClientError::EmptyBody`] when it is legitimately empty.
    pub fn response_body_or_fail(&self) -> Result<Bytes, ClientError> {
        match &self.data {
            None => Err(ClientError::BodyUnavailable),
            Some(data) if data.is_empty() => Err(ClientError::EmptyBody),
            Some(data) => Ok(data.clone()),
        }
    }

    /// Deserialize the body into `T`, best-effort.
    ///
    /// Decode failures are reported at debug level and swallowed; use
    /// [`dto_or_fail`](Self::dto_or_fail) when the error matters.
    pub fn dto<T: DeserializeOwned>(&self) -> Option<T> {
        match self.dto_or_fail() {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(error = %e, "response body did not resolve");
                None
            }
        }
    }

    /// Deserialize the body into `T` according to the declared content
    /// type of the response.
    ///
    /// The strategy is selected from the `content-type` header (JSON when
    /// absent or unrecognized). Resolution is a pure function of the
    /// captured data, so repeated calls yield the same outcome.
    ///
    /// # Errors
    /// [`ClientError::BodyUnavailable`] when the body was never captured;
    /// [`ClientError::Decode`] when the payload is not a valid document of
    /// the declared format — an empty payload included.
    pub fn dto_or_fail<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        let data = self.data.as_ref().ok_or(ClientError::BodyUnavailable)?;
        let content_type = self
            .header(http::header::CONTENT_TYPE.as_str())
            .unwrap_or_default();
        Decoder::for_content_type(&content_type).decode(data)
    }
}
