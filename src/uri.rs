use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// Immutable parsed view of an absolute URL.
///
/// The query is kept raw (undecoded) with no leading `?`; an absent query
/// is the empty string. Once constructed the value never changes, so
/// [`Uri::to_string`](std::string::ToString) is stable under repeated calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uri {
    scheme: String,
    authority: String,
    path: String,
    query: String,
}

impl Uri {
    /// Parse an absolute URL string.
    ///
    /// # Errors
    /// Returns [`ClientError::Uri`] when `raw` violates the URL grammar.
    /// Callers constructing a request or capturing a response must
    /// propagate this error rather than proceed with a malformed URI.
    pub fn parse(raw: &str) -> Result<Self, ClientError> {
        let url = url::Url::parse(raw)?;

        Ok(Self {
            scheme: url.scheme().to_owned(),
            authority: url.authority().to_owned(),
            path: url.path().to_owned(),
            query: url.query().unwrap_or_default().to_owned(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query string without the leading `?`; empty when absent.
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.authority, self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        Ok(())
    }
}

impl FromStr for Uri {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
