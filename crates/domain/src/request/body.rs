//! HTTP Request body types

use serde::{Deserialize, Serialize};

/// Request body in one of the shapes a request editor can produce.
///
/// A request without a body carries `None` rather than an empty variant.
/// The `mode` field is the discriminator for JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RequestBody {
    /// Raw text/JSON body.
    Raw {
        /// The text content. May contain `{{variables}}`.
        content: String,
    },

    /// URL-encoded form (application/x-www-form-urlencoded).
    UrlEncoded {
        /// Form fields in order.
        fields: Vec<UrlEncodedField>,
    },

    /// Multipart form data (multipart/form-data).
    FormData {
        /// Form fields (text values or file references).
        fields: Vec<FormDataField>,
    },

    /// Binary file body.
    Binary {
        /// Path to the file, if one was picked.
        #[serde(default)]
        path: Option<String>,
    },

    /// GraphQL query body.
    #[serde(rename = "graphql")]
    GraphQl {
        /// The GraphQL query string.
        query: String,
        /// GraphQL variables as JSON text.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variables: Option<String>,
    },
}

impl RequestBody {
    /// Creates a raw text body.
    #[must_use]
    pub fn raw(content: impl Into<String>) -> Self {
        Self::Raw {
            content: content.into(),
        }
    }

    /// Creates a url-encoded body.
    #[must_use]
    pub const fn url_encoded(fields: Vec<UrlEncodedField>) -> Self {
        Self::UrlEncoded { fields }
    }

    /// Creates a multipart form-data body.
    #[must_use]
    pub const fn form_data(fields: Vec<FormDataField>) -> Self {
        Self::FormData { fields }
    }

    /// Creates a binary body referencing a file path.
    #[must_use]
    pub fn binary(path: impl Into<String>) -> Self {
        Self::Binary {
            path: Some(path.into()),
        }
    }

    /// Creates a GraphQL body.
    #[must_use]
    pub fn graphql(query: impl Into<String>, variables: Option<String>) -> Self {
        Self::GraphQl {
            query: query.into(),
            variables,
        }
    }
}

/// A field of a url-encoded form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEncodedField {
    /// Field name.
    pub key: String,
    /// Field value.
    #[serde(default)]
    pub value: String,
    /// Whether this field is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl UrlEncodedField {
    /// Creates an enabled field.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates a disabled field.
    #[must_use]
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: false,
        }
    }
}

/// A field in a multipart form-data body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormDataField {
    /// Text field.
    Text {
        /// Field name.
        key: String,
        /// Field value. May contain `{{variables}}`.
        value: String,
        /// Whether this field is enabled.
        #[serde(default = "default_enabled")]
        enabled: bool,
    },
    /// File field.
    File {
        /// Field name.
        key: String,
        /// Path to the file.
        src: String,
        /// Whether this field is enabled.
        #[serde(default = "default_enabled")]
        enabled: bool,
    },
}

impl FormDataField {
    /// Creates an enabled text field.
    #[must_use]
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates an enabled file field.
    #[must_use]
    pub fn file(key: impl Into<String>, src: impl Into<String>) -> Self {
        Self::File {
            key: key.into(),
            src: src.into(),
            enabled: true,
        }
    }

    /// Returns the same field with `enabled` set to false.
    #[must_use]
    pub fn into_disabled(self) -> Self {
        match self {
            Self::Text { key, value, .. } => Self::Text {
                key,
                value,
                enabled: false,
            },
            Self::File { key, src, .. } => Self::File {
                key,
                src,
                enabled: false,
            },
        }
    }

    /// Whether this field is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::Text { enabled, .. } | Self::File { enabled, .. } => *enabled,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_body() {
        let body = RequestBody::raw("Hello, World!");
        match body {
            RequestBody::Raw { content } => assert_eq!(content, "Hello, World!"),
            _ => panic!("Expected Raw body"),
        }
    }

    #[test]
    fn test_form_data_field_disable() {
        let field = FormDataField::file("avatar", "uploads/avatar.png");
        assert!(field.is_enabled());
        assert!(!field.into_disabled().is_enabled());
    }

    #[test]
    fn test_body_serializes_with_mode_tag() {
        let body = RequestBody::graphql("{ me { id } }", None);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["mode"], "graphql");
        assert_eq!(json["query"], "{ me { id } }");
    }
}
