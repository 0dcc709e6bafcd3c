//! Joined-value lookup over owned header snapshots.
//!
//! Headers are stored as [`http::HeaderMap`]s, preserving multi-value
//! structure; this module provides the textual "joined value by
//! case-insensitive key" view of that store.

use http::HeaderMap;

/// Joined textual value of a header, looked up case-insensitively.
///
/// Multi-valued headers are joined with `", "`. Values that are not valid
/// UTF-8 are skipped. Returns `None` when the key is absent.
pub fn joined(headers: &HeaderMap, key: &str) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(key)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::HeaderValue;

    #[test]
    fn single_value_lookup() {
        let mut headers = HeaderMap::new();
        headers.append("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(
            joined(&headers, "content-type").as_deref(),
            Some("application/json")
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.append("x-request-id", HeaderValue::from_static("abc"));
        assert_eq!(joined(&headers, "X-Request-Id").as_deref(), Some("abc"));
    }

    #[test]
    fn multi_valued_headers_are_joined() {
        let mut headers = HeaderMap::new();
        headers.append("x-tag", HeaderValue::from_static("a"));
        headers.append("x-tag", HeaderValue::from_static("b"));
        assert_eq!(joined(&headers, "x-tag").as_deref(), Some("a, b"));
    }

    #[test]
    fn absent_key_returns_none() {
        assert_eq!(joined(&HeaderMap::new(), "x-missing"), None);
    }
}
