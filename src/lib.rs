//! Composable HTTP client convenience layer.
//!
//! Builds outgoing requests from explicit configuration (method, headers,
//! query, body, timeout), executes them over a reqwest transport, and
//! normalizes every completed exchange into a uniform [`Response`] that
//! exposes status, headers, the raw body bytes, and a content-type driven
//! deserialized value:
//!
//! - `application/json` bodies resolve with serde_json
//! - `text/xml` bodies resolve with quick-xml
//! - anything else falls back to JSON, the system-wide default format
//!
//! A [`Response`] is captured immutably: the body is drained into memory
//! exactly once, both header stores and the request URI are snapshotted,
//! and the request's own body is echoed back (best-effort) for
//! observability. Deserialization is a pure function of the captured data
//! — call it lazily, repeatedly, or not at all.
//!
//! # Examples
//!
//! ## Async usage
//!
//! ```no_run
//! use courier_client::{Body, Connector, Method, Request, RequestConfig};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Item {
//!     id: u64,
//!     title: String,
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let connector = Connector::new("https://api.example.com")?;
//!
//! let request = Request::new(
//!     "/items",
//!     RequestConfig {
//!         method: Method::POST,
//!         body: Body::from_json(&serde_json::json!({"title": "x"}))?,
//!         ..RequestConfig::default()
//!     },
//! );
//!
//! let response = connector.execute(request).await?;
//! assert!(response.ok());
//!
//! let item: Item = response.dto_or_fail()?;
//! println!("{} -> {}", item.id, item.title);
//! # Ok(())
//! # }
//! ```
//!
//! ## Blocking usage
//!
//! ```no_run
//! use courier_client::Connector;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let connector = Connector::new("https://api.example.com")?;
//! let response = connector.send_blocking("/health")?;
//! println!("status: {}", response.status());
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspecting a captured exchange
//!
//! ```no_run
//! use courier_client::{Connector, Request, RequestConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let connector = Connector::new("https://api.example.com")?;
//!
//! let request = Request::new(
//!     "/search",
//!     RequestConfig {
//!         query: vec![("q".into(), "rust http".into())],
//!         ..RequestConfig::default()
//!     },
//! );
//!
//! let response = connector.execute(request).await?;
//! println!("{} {}", response.method(), response.request_uri());
//! if let Some(content_type) = response.header("content-type") {
//!     println!("declared content type: {content_type}");
//! }
//! # Ok(())
//! # }
//! ```

mod body;
mod connector;
mod decoder;
mod error;
pub mod header;
mod request;
mod response;
mod uri;

// Re-export public API
pub use body::Body;
pub use connector::{Connector, ConnectorConfig};
pub use decoder::{APPLICATION_JSON, Decoder, TEXT_XML};
pub use error::ClientError;
pub use request::{Request, RequestConfig};
pub use response::{Response, ResponseParts};
pub use uri::Uri;

// Re-export commonly used types from dependencies
pub use http::{Method, StatusCode};
