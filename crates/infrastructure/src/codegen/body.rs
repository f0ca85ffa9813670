//! Body statements.
//!
//! Each body mode becomes zero or more chained Unirest calls, one per line.
//! Disabled form fields are never emitted.

use serde_json::{Value as JsonValue, json};
use unisnip_domain::{FormDataField, RequestBody, UrlEncodedField};

use super::escape::{escape_java, sanitize, trim_text};

const MISSING_FILE_BODY: &str = "<file contents here>";

/// Renders the body statements for `body`.
///
/// With `trim` set, raw text is tidied and form keys and values lose their
/// surrounding whitespace.
#[must_use]
pub fn serialize_body(body: Option<&RequestBody>, indent: &str, trim: bool) -> String {
    let Some(body) = body else {
        return String::new();
    };

    match body {
        RequestBody::Raw { content } => raw_body(content, indent, trim),
        RequestBody::UrlEncoded { fields } => url_encoded_body(fields, indent, trim),
        RequestBody::FormData { fields } => form_data_body(fields, indent, trim),
        RequestBody::Binary { path } => binary_body(path.as_deref(), indent),
        RequestBody::GraphQl { query, variables } => {
            graphql_body(query, variables.as_deref(), indent, trim)
        }
    }
}

fn raw_body(content: &str, indent: &str, trim: bool) -> String {
    let text = if trim {
        trim_text(content)
    } else {
        content.to_string()
    };
    if text.is_empty() {
        return String::new();
    }
    format!("{indent}.body(\"{}\")\n", escape_java(&text))
}

fn field_line(indent: &str, key: &str, value: &str, trim: bool) -> String {
    format!(
        "{indent}.field(\"{}\", \"{}\")\n",
        sanitize(key, trim),
        sanitize(value, trim)
    )
}

fn url_encoded_body(fields: &[UrlEncodedField], indent: &str, trim: bool) -> String {
    fields
        .iter()
        .filter(|field| field.enabled)
        .map(|field| field_line(indent, &field.key, &field.value, trim))
        .collect()
}

fn form_data_body(fields: &[FormDataField], indent: &str, trim: bool) -> String {
    let lines: String = fields
        .iter()
        .filter(|field| field.is_enabled())
        .map(|field| match field {
            FormDataField::Text { key, value, .. } => field_line(indent, key, value, trim),
            FormDataField::File { key, src, .. } => format!(
                "{indent}.field(\"{}\", new File(\"{}\"))\n",
                sanitize(key, trim),
                escape_java(src)
            ),
        })
        .collect();

    if lines.is_empty() {
        lines
    } else {
        format!("{indent}.multiPartContent()\n{lines}")
    }
}

fn binary_body(path: Option<&str>, indent: &str) -> String {
    match path.filter(|p| !p.is_empty()) {
        Some(path) => format!(
            "{indent}.body(java.nio.file.Files.readAllBytes(java.nio.file.Paths.get(\"{}\")))\n",
            escape_java(path)
        ),
        None => format!("{indent}.body(\"{MISSING_FILE_BODY}\")\n"),
    }
}

fn graphql_body(query: &str, variables: Option<&str>, indent: &str, trim: bool) -> String {
    let query = if trim { trim_text(query) } else { query.to_string() };
    let variables = variables
        .filter(|text| !text.trim().is_empty())
        .map_or_else(
            || json!({}),
            |text| {
                serde_json::from_str::<JsonValue>(text).unwrap_or_else(|e| {
                    tracing::debug!(error = %e, "GraphQL variables are not valid JSON, sending {{}}");
                    json!({})
                })
            },
        );

    let payload = json!({ "query": query, "variables": variables });
    format!("{indent}.body(\"{}\")\n", escape_java(&payload.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_body() {
        assert_eq!(serialize_body(None, "  ", false), "");
    }

    #[test]
    fn test_raw_body_is_escaped() {
        let body = RequestBody::raw("{\n  \"a\": \"b\\c\"\n}");
        assert_eq!(
            serialize_body(Some(&body), "  ", false),
            "  .body(\"{\\n  \\\"a\\\": \\\"b\\\\c\\\"\\n}\")\n"
        );
    }

    #[test]
    fn test_empty_raw_body() {
        assert_eq!(serialize_body(Some(&RequestBody::raw("")), "  ", false), "");
        assert_eq!(serialize_body(Some(&RequestBody::raw("  \n ")), "  ", true), "");
    }

    #[test]
    fn test_raw_body_trimmed() {
        let body = RequestBody::raw("  \nline one   \n\n\nline two  \n");
        assert_eq!(
            serialize_body(Some(&body), " ", true),
            " .body(\"line one\\nline two\")\n"
        );
    }

    #[test]
    fn test_raw_crlf_body_trimmed() {
        let body = RequestBody::raw("a   \r\n\r\nb  \r\n");
        assert_eq!(
            serialize_body(Some(&body), "  ", true),
            "  .body(\"a\\r\\nb\")\n"
        );
    }

    #[test]
    fn test_url_encoded_fields() {
        let body = RequestBody::url_encoded(vec![
            UrlEncodedField::new("1", "'a'"),
            UrlEncodedField::disabled("off", "x"),
            UrlEncodedField::new("2", "\"b\""),
        ]);
        assert_eq!(
            serialize_body(Some(&body), "  ", false),
            "  .field(\"1\", \"'a'\")\n  .field(\"2\", \"\\\"b\\\"\")\n"
        );
    }

    #[test]
    fn test_url_encoded_fields_trimmed() {
        let body = RequestBody::url_encoded(vec![UrlEncodedField::new(" key ", "inputString     ")]);
        assert_eq!(
            serialize_body(Some(&body), "  ", true),
            "  .field(\"key\", \"inputString\")\n"
        );
    }

    #[test]
    fn test_form_data_text_and_file() {
        let body = RequestBody::form_data(vec![
            FormDataField::text("name", "value"),
            FormDataField::file("upload", "/tmp/a.txt"),
            FormDataField::text("hidden", "x").into_disabled(),
        ]);
        assert_eq!(
            serialize_body(Some(&body), "  ", false),
            "  .multiPartContent()\n  .field(\"name\", \"value\")\n  .field(\"upload\", new File(\"/tmp/a.txt\"))\n"
        );
    }

    #[test]
    fn test_form_data_all_disabled() {
        let body = RequestBody::form_data(vec![FormDataField::text("k", "v").into_disabled()]);
        assert_eq!(serialize_body(Some(&body), "  ", false), "");
    }

    #[test]
    fn test_binary_with_path() {
        let body = RequestBody::binary("/data/image.png");
        assert_eq!(
            serialize_body(Some(&body), "  ", false),
            "  .body(java.nio.file.Files.readAllBytes(java.nio.file.Paths.get(\"/data/image.png\")))\n"
        );
    }

    #[test]
    fn test_binary_without_path() {
        let body = RequestBody::Binary { path: None };
        assert_eq!(
            serialize_body(Some(&body), "  ", false),
            "  .body(\"<file contents here>\")\n"
        );
    }

    #[test]
    fn test_graphql_body() {
        let body = RequestBody::graphql("{ me { id } }", Some("{\"a\": 1}".into()));
        assert_eq!(
            serialize_body(Some(&body), "  ", false),
            "  .body(\"{\\\"query\\\":\\\"{ me { id } }\\\",\\\"variables\\\":{\\\"a\\\":1}}\")\n"
        );
    }

    #[test]
    fn test_graphql_invalid_variables() {
        let body = RequestBody::graphql("{ me }", Some("not json".into()));
        assert_eq!(
            serialize_body(Some(&body), "", false),
            ".body(\"{\\\"query\\\":\\\"{ me }\\\",\\\"variables\\\":{}}\")\n"
        );
    }
}
