//! Option sanitizer
//!
//! Maps a partial, untyped option map onto [`GeneratorOptions`]. Unknown keys
//! are ignored, missing or `null` keys take the declared default, and values
//! of the wrong type are reported instead of being coerced.

use serde_json::{Map, Value as JsonValue};
use unisnip_domain::{GeneratorOptions, OptionKind, OptionSpec};

use super::schema::option_specs;
use crate::error::{OptionIssue, OptionsError, OptionsResult};

/// Validates `input` against `specs` and returns the completed option map.
///
/// # Errors
///
/// Returns [`OptionsError::Invalid`] listing every value that does not match
/// its declared type.
pub fn sanitize_option_map(
    input: &Map<String, JsonValue>,
    specs: &[OptionSpec],
) -> OptionsResult<Map<String, JsonValue>> {
    let mut resolved = Map::new();
    let mut issues = Vec::new();

    for spec in specs {
        let value = match input.get(&spec.id) {
            None | Some(JsonValue::Null) => spec.default.clone(),
            Some(value) => match check_value(&spec.kind, value) {
                Ok(()) => value.clone(),
                Err(expected) => {
                    issues.push(OptionIssue::new(&spec.id, expected, value.to_string()));
                    continue;
                }
            },
        };
        resolved.insert(spec.id.clone(), value);
    }

    if issues.is_empty() {
        Ok(resolved)
    } else {
        Err(OptionsError::Invalid { issues })
    }
}

/// Builds the Unirest generator configuration from caller options.
///
/// # Errors
///
/// Returns [`OptionsError::Invalid`] when a value has the wrong type and
/// [`OptionsError::Mismatch`] if the schema and the configuration struct
/// disagree.
pub fn sanitize_options(input: &Map<String, JsonValue>) -> OptionsResult<GeneratorOptions> {
    let resolved = sanitize_option_map(input, &option_specs())?;
    serde_json::from_value(JsonValue::Object(resolved))
        .map_err(|e| OptionsError::Mismatch(e.to_string()))
}

fn check_value(kind: &OptionKind, value: &JsonValue) -> Result<(), String> {
    match kind {
        OptionKind::Boolean if value.is_boolean() => Ok(()),
        OptionKind::Boolean => Err("a boolean".to_string()),
        OptionKind::PositiveInteger { maximum } => match (value.as_u64(), maximum) {
            (Some(n), Some(max)) if n > *max => Err(format!("an integer from 0 to {max}")),
            (Some(_), _) => Ok(()),
            (None, Some(max)) => Err(format!("an integer from 0 to {max}")),
            (None, None) => Err("a non-negative integer".to_string()),
        },
        OptionKind::Enum { available_options } => match value.as_str() {
            Some(s) if available_options.iter().any(|o| o == s) => Ok(()),
            _ => Err(format!("one of {}", available_options.join(", "))),
        },
    }
}
