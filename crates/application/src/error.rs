//! Application error types

use std::fmt;

use thiserror::Error;

/// One rejected option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionIssue {
    /// Option id as supplied by the caller.
    pub id: String,
    /// What the schema accepts, e.g. "a boolean".
    pub expected: String,
    /// The rejected value rendered as JSON.
    pub found: String,
}

impl OptionIssue {
    /// Creates an issue for option `id`.
    #[must_use]
    pub fn new(id: impl Into<String>, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl fmt::Display for OptionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` expected {}, got {}", self.id, self.expected, self.found)
    }
}

fn join_issues(issues: &[OptionIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised while turning caller options into a generator configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// One or more supplied values do not match the declared option types.
    #[error("invalid generator options: {}", join_issues(.issues))]
    Invalid {
        /// Every rejected value, in schema order.
        issues: Vec<OptionIssue>,
    },

    /// The validated values could not be mapped onto the configuration struct.
    #[error("options do not fit the generator configuration: {0}")]
    Mismatch(String),
}

impl OptionsError {
    /// Returns the rejected values, empty for non-validation errors.
    #[must_use]
    pub fn issues(&self) -> &[OptionIssue] {
        match self {
            Self::Invalid { issues } => issues,
            Self::Mismatch(_) => &[],
        }
    }
}

/// Result type alias for option handling.
pub type OptionsResult<T> = Result<T, OptionsError>;
