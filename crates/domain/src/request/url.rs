//! Decomposed URL type

use serde::{Deserialize, Serialize};

use super::QueryParams;

/// Credentials embedded in the authority part of a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlAuth {
    /// User name. An empty user suppresses the whole auth segment.
    #[serde(default)]
    pub user: String,
    /// Optional password, only rendered together with a user.
    #[serde(default)]
    pub password: Option<String>,
}

impl UrlAuth {
    /// Creates credentials with a user and an optional password.
    #[must_use]
    pub fn new(user: impl Into<String>, password: Option<String>) -> Self {
        Self {
            user: user.into(),
            password,
        }
    }
}

/// Value for a `:name` segment in the URL path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathVariable {
    /// Variable name without the leading colon.
    pub key: String,
    /// Substituted value; `None` leaves the segment as written.
    #[serde(default)]
    pub value: Option<String>,
}

impl PathVariable {
    /// Creates a path variable with a value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }
}

/// A URL split into the parts a request editor keeps separately.
///
/// Every part is optional; an all-default `Url` stands for "no URL".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    /// Scheme such as `https`
    #[serde(default)]
    pub protocol: Option<String>,
    /// Embedded credentials
    #[serde(default)]
    pub auth: Option<UrlAuth>,
    /// Host labels, joined by `.`
    #[serde(default)]
    pub host: Vec<String>,
    /// Port, kept as text so `{{port}}` survives
    #[serde(default)]
    pub port: Option<String>,
    /// Path segments, joined by `/`
    #[serde(default)]
    pub path: Vec<String>,
    /// Query parameters in order
    #[serde(default)]
    pub query: QueryParams,
    /// Fragment without the leading `#`
    #[serde(default)]
    pub hash: Option<String>,
    /// Values for `:name` path segments
    #[serde(default)]
    pub variables: Vec<PathVariable>,
}

impl Url {
    /// Creates an empty URL.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no component is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.protocol.is_none()
            && self.auth.is_none()
            && self.host.is_empty()
            && self.port.is_none()
            && self.path.is_empty()
            && self.query.is_empty()
            && self.hash.is_none()
    }

    /// Returns the value bound to a `:name` path variable, if any.
    #[must_use]
    pub fn variable(&self, key: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|v| v.key == key)
            .and_then(|v| v.value.as_deref())
    }
}
