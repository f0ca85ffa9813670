//! Code generation types for generating snippets from requests.
//!
//! This module holds the typed generator configuration, the self-describing
//! option records consumed by configuration UIs, and the generated snippet.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

use crate::diagnostic::Diagnostic;

/// Largest accepted `indentCount`.
pub const MAX_INDENT_COUNT: usize = 64;

/// Character used for one level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IndentType {
    /// Horizontal tab
    Tab,
    /// Plain space
    #[default]
    Space,
}

impl IndentType {
    /// Returns the option value as shown in configuration UIs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tab => "Tab",
            Self::Space => "Space",
        }
    }

    /// Returns the single indentation character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Tab => '\t',
            Self::Space => ' ',
        }
    }
}

impl fmt::Display for IndentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for snippet generation.
///
/// Built fresh for every conversion; field ids match the camelCase option
/// ids published by the option schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    /// Wrap the snippet in imports and a runnable class.
    pub include_boilerplate: bool,
    /// Indentation characters per code level.
    pub indent_count: usize,
    /// Indentation character.
    pub indent_type: IndentType,
    /// Response timeout in milliseconds, 0 for none.
    pub request_timeout: u64,
    /// Follow HTTP redirects automatically.
    pub follow_redirect: bool,
    /// Trim whitespace from body content and fields.
    pub trim_request_body: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            include_boilerplate: false,
            indent_count: 2,
            indent_type: IndentType::Space,
            request_timeout: 0,
            follow_redirect: true,
            trim_request_body: false,
        }
    }
}

impl GeneratorOptions {
    /// Get the indentation string for one level.
    ///
    /// Counts above [`MAX_INDENT_COUNT`] are capped.
    #[must_use]
    pub fn indent(&self) -> String {
        self.indent_type
            .as_char()
            .to_string()
            .repeat(self.indent_count.min(MAX_INDENT_COUNT))
    }

    /// Get the indentation string for `levels` levels.
    #[must_use]
    pub fn indent_levels(&self, levels: usize) -> String {
        self.indent().repeat(levels)
    }
}

/// Value type accepted by a generator option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OptionKind {
    /// `true` or `false`
    Boolean,
    /// Integer greater than or equal to zero
    PositiveInteger {
        /// Inclusive upper bound, if any
        #[serde(default, skip_serializing_if = "Option::is_none")]
        maximum: Option<u64>,
    },
    /// One of a fixed list of strings
    Enum {
        /// Accepted values
        #[serde(rename = "availableOptions")]
        available_options: Vec<String>,
    },
}

/// Self-describing record for one generator option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Human readable label
    pub name: String,
    /// Key used in option maps
    pub id: String,
    /// Value type
    #[serde(flatten)]
    pub kind: OptionKind,
    /// Value used when the caller supplies none
    pub default: JsonValue,
    /// One-line explanation for UIs
    pub description: String,
}

impl OptionSpec {
    /// Creates an option record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        kind: OptionKind,
        default: JsonValue,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            kind,
            default,
            description: description.into(),
        }
    }
}

/// Generated code snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    /// The generated code.
    pub code: String,
    /// Recoverable problems found while generating.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl CodeSnippet {
    /// Create a new code snippet without diagnostics.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            diagnostics: Vec::new(),
        }
    }

    /// Add diagnostics.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) -> Self {
        self.diagnostics.extend(diagnostics);
        self
    }

    /// Returns true if generation reported any diagnostic.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
