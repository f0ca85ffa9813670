//! Code generation infrastructure.
//!
//! Turns a [`unisnip_domain::Request`] into a Java snippet for the Unirest
//! HTTP client.

mod body;
mod escape;
mod generator;
mod headers;
mod url;

pub use body::serialize_body;
pub use escape::escape_java;
pub use generator::{
    ConvertError, ConvertResult, UnirestGenerator, convert, generate_code, try_convert,
};
pub use headers::serialize_headers;
pub use url::{ReconstructedUrl, encode_query_value, reconstruct_url, url_to_string};
