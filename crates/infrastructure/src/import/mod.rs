//! Import functionality for external request formats.

pub mod postman;

pub use postman::{ImportError, PostmanRequest, parse_postman_request, parse_raw_url};
