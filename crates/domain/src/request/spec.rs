//! Request type

use serde::{Deserialize, Serialize};

use super::{Header, Headers, RequestBody, Url};

/// Complete description of one HTTP request to render as a snippet.
///
/// The method stays a free-form string because request editors accept any
/// verb; generators decide what to do with ones they cannot express.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method, compared case-insensitively
    pub method: String,
    /// Target URL in decomposed form
    #[serde(default)]
    pub url: Url,
    /// HTTP headers
    #[serde(default)]
    pub headers: Headers,
    /// Request body, `None` when the request carries none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
}

impl Request {
    /// Creates a request with the given method and URL and nothing else.
    #[must_use]
    pub fn new(method: impl Into<String>, url: Url) -> Self {
        Self {
            method: method.into(),
            url,
            headers: Headers::new(),
            body: None,
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, header: Header) -> Self {
        self.headers.add(header);
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new("GET", Url::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let req = Request::default();
        assert_eq!(req.method, "GET");
        assert!(req.url.is_empty());
        assert!(req.headers.as_slice().is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let req = Request::new("POST", Url::default())
            .with_header(Header::new("Accept", "*/*"))
            .with_body(RequestBody::raw("hi"));
        assert_eq!(req.headers.as_slice().len(), 1);
        assert_eq!(req.body, Some(RequestBody::raw("hi")));
    }
}
