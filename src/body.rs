use bytes::Bytes;
use serde::Serialize;

use crate::error::ClientError;

/// HTTP request body abstraction
#[derive(Debug, Clone, Default)]
pub enum Body {
    /// Empty body
    #[default]
    Empty,
    /// Buffered bytes
    Bytes(Bytes),
}

impl Body {
    /// Create an empty body
    pub fn empty() -> Self {
        Body::Empty
    }

    /// Create a body from bytes
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Body::Bytes(bytes.into())
    }

    /// Create a body from a JSON-serializable value
    ///
    /// # Errors
    /// Returns [`ClientError::Serialization`] when `value` cannot be
    /// encoded.
    pub fn from_json<T: Serialize>(value: &T) -> Result<Self, ClientError> {
        let json =
            serde_json::to_vec(value).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(Body::Bytes(Bytes::from(json)))
    }

    /// Create an `application/x-www-form-urlencoded` body from a
    /// serializable value
    ///
    /// # Errors
    /// Returns [`ClientError::Serialization`] when `value` cannot be
    /// encoded as form pairs.
    pub fn from_form<T: Serialize>(value: &T) -> Result<Self, ClientError> {
        let form = serde_urlencoded::to_string(value)
            .map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(Body::Bytes(Bytes::from(form)))
    }

    /// Check if body is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }

    /// Raw bytes of the body; `None` for the empty body
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Body::Empty => None,
            Body::Bytes(bytes) => Some(bytes),
        }
    }
}

// Convenient From trait implementations
impl From<()> for Body {
    fn from(_: ()) -> Self {
        Body::Empty
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Body::Bytes(Bytes::from(s))
    }
}

impl From<&str> for Body {
    fn from(s: &str) -> Self {
        Body::Bytes(Bytes::from(s.to_owned()))
    }
}

impl From<Vec<u8>> for Body {
    fn from(v: Vec<u8>) -> Self {
        Body::Bytes(Bytes::from(v))
    }
}

impl From<Bytes> for Body {
    fn from(b: Bytes) -> Self {
        Body::Bytes(b)
    }
}
