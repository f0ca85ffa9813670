//! Java string literal helpers.

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static TRAILING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)[ \t]+$").expect("valid regex"));

#[allow(clippy::expect_used)]
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\r?\n)+").expect("valid regex"));

/// Escapes `input` for use inside a double-quoted Java string literal.
#[must_use]
pub fn escape_java(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes a field value, trimming surrounding whitespace first if asked.
#[must_use]
pub fn sanitize(input: &str, trim: bool) -> String {
    if trim {
        escape_java(input.trim())
    } else {
        escape_java(input)
    }
}

/// Tidies free text for a trimmed body.
///
/// Surrounding whitespace goes, each line loses its trailing whitespace and
/// blank lines are dropped. Spaces inside a line are kept.
#[must_use]
pub fn trim_text(input: &str) -> String {
    let without_trailing = TRAILING_WHITESPACE.replace_all(input.trim(), "");
    BLANK_LINES.replace_all(&without_trailing, "\n").into_owned()
}
