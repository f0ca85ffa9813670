//! Postman request type definitions
//!
//! The request subset of the Postman Collection v2.1 format. All types use
//! `#[serde(default)]` extensively to handle format variations gracefully.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

fn default_method() -> String {
    "GET".to_string()
}

/// Postman Request definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanRequest {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub url: PostmanUrl,
    #[serde(default)]
    pub header: Vec<PostmanHeader>,
    #[serde(default)]
    pub body: Option<PostmanBody>,
    #[serde(default)]
    pub description: Option<String>,
}

/// URL can be either a simple string or a structured object
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PostmanUrl {
    #[default]
    Empty,
    Simple(String),
    Structured(PostmanUrlStructured),
}

/// Host or path, written either joined or as a list of parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostmanSegments {
    Joined(String),
    Parts(Vec<String>),
}

/// Structured URL object
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PostmanUrlStructured {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub auth: Option<PostmanUrlAuth>,
    #[serde(default)]
    pub host: Option<PostmanSegments>,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub path: Option<PostmanSegments>,
    #[serde(default)]
    pub query: Vec<PostmanQueryParam>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub variable: Vec<PostmanPathVariable>,
}

impl PostmanUrlStructured {
    /// Returns true if the object carries decomposed parts rather than only
    /// a raw string.
    #[must_use]
    pub fn has_components(&self) -> bool {
        self.protocol.is_some() || self.host.is_some() || self.path.is_some() || !self.query.is_empty()
    }
}

/// Credentials embedded in the URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanUrlAuth {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: Option<String>,
}

/// Query parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanQueryParam {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// Path variable (for URL templates like :id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanPathVariable {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanHeader {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// Request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanBody {
    pub mode: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub urlencoded: Vec<PostmanFormParam>,
    #[serde(default)]
    pub formdata: Vec<PostmanFormDataParam>,
    #[serde(default)]
    pub file: Option<PostmanBodyFile>,
    #[serde(default)]
    pub graphql: Option<PostmanGraphQL>,
}

/// Form URL-encoded parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanFormParam {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// Form-data parameter (supports file uploads)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanFormDataParam {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub param_type: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

impl PostmanFormDataParam {
    /// Returns true for file upload fields.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.param_type.as_deref() == Some("file")
    }
}

/// Binary file body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanBodyFile {
    #[serde(default)]
    pub src: Option<String>,
}

/// GraphQL body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanGraphQL {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub variables: Option<String>,
}
