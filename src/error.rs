use std::io;

use thiserror::Error;

use crate::response::Response;

/// Errors produced while building, dispatching, or reading an exchange.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid connector or request configuration.
    #[error("build error: {0}")]
    Build(String),

    /// The composed URL violates the URL grammar.
    #[error("invalid url: {0}")]
    Uri(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("timeout: {0}")]
    Timeout(String),

    /// Reading the response body failed. The boxed response is still
    /// inspectable (status, headers, request snapshot) but its body is
    /// unset, not empty.
    #[error("failed to read response body: {source}")]
    BodyRead {
        source: reqwest::Error,
        response: Box<Response>,
    },

    /// A forcing accessor was used on a response whose body was never
    /// captured.
    #[error("response body was never captured")]
    BodyUnavailable,

    /// The forcing raw-body accessor was used on an empty body.
    #[error("response body is empty")]
    EmptyBody,

    /// The body is not a valid document of the declared content type.
    #[error("decode error: {0}")]
    Decode(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
