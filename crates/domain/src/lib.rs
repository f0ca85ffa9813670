//! Unisnip Domain - Core business types
//!
//! This crate defines the request model and generator configuration for the
//! Unisnip snippet generator.
//! All types here are pure Rust with no I/O dependencies.

pub mod codegen;
pub mod diagnostic;
pub mod error;
pub mod request;

pub use codegen::{
    CodeSnippet, GeneratorOptions, IndentType, MAX_INDENT_COUNT, OptionKind, OptionSpec,
};
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use error::{DomainError, DomainResult};
pub use request::{
    FormDataField, Header, Headers, HttpMethod, PathVariable, QueryParam, QueryParams, Request,
    RequestBody, Url, UrlAuth, UrlEncodedField,
};
