//! HTTP Request domain types

mod body;
mod header;
mod method;
mod query;
mod spec;
mod url;

pub use body::{FormDataField, RequestBody, UrlEncodedField};
pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use query::{QueryParam, QueryParams};
pub use spec::Request;
pub use url::{PathVariable, Url, UrlAuth};
