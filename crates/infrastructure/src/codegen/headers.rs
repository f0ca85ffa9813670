//! Header statements.

use unisnip_domain::Headers;

use super::escape::escape_java;

/// Renders one `.header(...)` call per enabled header.
///
/// Keys are trimmed, values are kept as entered.
#[must_use]
pub fn serialize_headers(headers: &Headers, indent: &str) -> String {
    headers
        .emitted()
        .map(|(key, value)| {
            format!(
                "{indent}.header(\"{}\", \"{}\")\n",
                escape_java(key),
                escape_java(value)
            )
        })
        .collect()
}
