//! Unisnip Infrastructure - Unirest code generator and request import
//!
//! This crate renders [`unisnip_domain::Request`] values as Java Unirest
//! snippets and reads requests from the Postman v2.1 JSON format.
//!
//! ```
//! use serde_json::Map;
//! use unisnip_infrastructure::{convert, parse_postman_request};
//!
//! let request = parse_postman_request(r#"{"method": "GET", "url": "https://postman-echo.com/get"}"#)?;
//! let code = convert(&request, &Map::new(), |result| result.map(|snippet| snippet.code))?;
//! assert!(code.contains(r#"Unirest.get("https://postman-echo.com/get")"#));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codegen;
pub mod import;

pub use codegen::{
    ConvertError, ConvertResult, ReconstructedUrl, UnirestGenerator, convert, encode_query_value,
    generate_code, reconstruct_url, serialize_body, serialize_headers, try_convert, url_to_string,
};
pub use import::{ImportError, PostmanRequest, parse_postman_request, parse_raw_url};
pub use unisnip_application::option_specs as get_options;
