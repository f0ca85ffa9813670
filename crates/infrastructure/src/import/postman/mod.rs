//! Postman Import Module
//!
//! Reads a single Postman v2.1 request object and maps it into the
//! [`Request`] model used by the generators.

pub mod mapper;
pub mod types;
pub mod url_parser;

use thiserror::Error;
use unisnip_domain::Request;

pub use mapper::{map_body, map_headers, map_query_params, map_url};
pub use types::{PostmanRequest, PostmanUrl};
pub use url_parser::parse_raw_url;

/// Error type for Postman import operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// JSON parsing failed
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    /// Valid JSON that is not a Postman request
    #[error("Invalid Postman format: {0}")]
    InvalidFormat(String),
}

/// Parses a Postman request JSON object into a [`Request`].
///
/// # Errors
///
/// Returns [`ImportError::InvalidJson`] for malformed JSON and
/// [`ImportError::InvalidFormat`] when the JSON does not describe a request.
pub fn parse_postman_request(json: &str) -> Result<Request, ImportError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ImportError::InvalidJson(e.to_string()))?;
    let request: PostmanRequest =
        serde_json::from_value(value).map_err(|e| ImportError::InvalidFormat(e.to_string()))?;
    Ok(request.into_request())
}
