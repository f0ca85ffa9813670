//! Declared generator options
//!
//! The records returned here are the single source of truth for option ids,
//! types and defaults; the sanitizer validates against them.

use serde_json::Value as JsonValue;
use unisnip_domain::{IndentType, MAX_INDENT_COUNT, OptionKind, OptionSpec};

/// Option id: wrap the snippet in a runnable class.
pub const INCLUDE_BOILERPLATE: &str = "includeBoilerplate";
/// Option id: indentation characters per level.
pub const INDENT_COUNT: &str = "indentCount";
/// Option id: indentation character.
pub const INDENT_TYPE: &str = "indentType";
/// Option id: response timeout in milliseconds.
pub const REQUEST_TIMEOUT: &str = "requestTimeout";
/// Option id: follow redirects.
pub const FOLLOW_REDIRECT: &str = "followRedirect";
/// Option id: trim body content.
pub const TRIM_REQUEST_BODY: &str = "trimRequestBody";

/// Returns the options the Unirest generator understands, in display order.
#[must_use]
pub fn option_specs() -> Vec<OptionSpec> {
    vec![
        OptionSpec::new(
            "Include boilerplate",
            INCLUDE_BOILERPLATE,
            OptionKind::Boolean,
            JsonValue::Bool(false),
            "Include class definition and import statements in snippet",
        ),
        OptionSpec::new(
            "Set indentation count",
            INDENT_COUNT,
            OptionKind::PositiveInteger {
                maximum: Some(MAX_INDENT_COUNT as u64),
            },
            JsonValue::from(2),
            "Set the number of indentation characters to add per code level",
        ),
        OptionSpec::new(
            "Set indentation type",
            INDENT_TYPE,
            OptionKind::Enum {
                available_options: vec![
                    IndentType::Tab.as_str().to_string(),
                    IndentType::Space.as_str().to_string(),
                ],
            },
            JsonValue::from(IndentType::Space.as_str()),
            "Select the character used to indent lines of code",
        ),
        OptionSpec::new(
            "Set request timeout",
            REQUEST_TIMEOUT,
            OptionKind::PositiveInteger { maximum: None },
            JsonValue::from(0),
            "Set number of milliseconds the request should wait for a response \
             before timing out (use 0 for infinity)",
        ),
        OptionSpec::new(
            "Follow redirects",
            FOLLOW_REDIRECT,
            OptionKind::Boolean,
            JsonValue::Bool(true),
            "Automatically follow HTTP redirects",
        ),
        OptionSpec::new(
            "Trim request body fields",
            TRIM_REQUEST_BODY,
            OptionKind::Boolean,
            JsonValue::Bool(false),
            "Remove white space and additional lines that may affect the server's response",
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_option_order() {
        let ids: Vec<_> = option_specs().into_iter().map(|o| o.id).collect();
        assert_eq!(
            ids,
            vec![
                INCLUDE_BOILERPLATE,
                INDENT_COUNT,
                INDENT_TYPE,
                REQUEST_TIMEOUT,
                FOLLOW_REDIRECT,
                TRIM_REQUEST_BODY,
            ]
        );
    }

    #[test]
    fn test_defaults_match_generator_options() {
        let defaults: serde_json::Map<_, _> = option_specs()
            .into_iter()
            .map(|o| (o.id, o.default))
            .collect();
        let from_schema: unisnip_domain::GeneratorOptions =
            serde_json::from_value(JsonValue::Object(defaults)).unwrap();
        assert_eq!(from_schema, unisnip_domain::GeneratorOptions::default());
    }
}
