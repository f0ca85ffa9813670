//! Request headers

use serde::{Deserialize, Serialize};

/// One header row of a request.
///
/// Keys often arrive with stray whitespace from hand-edited collections.
/// They are trimmed only when a snippet is written; values are never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name as entered
    pub key: String,
    /// Header value as entered
    pub value: String,
    /// Disabled rows are kept but never emitted
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

const fn enabled_by_default() -> bool {
    true
}

impl Header {
    /// An enabled header.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// A header that is kept in the request but left out of the snippet.
    #[must_use]
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            enabled: false,
            ..Self::new(key, value)
        }
    }

    /// The key as it appears in generated code.
    #[must_use]
    pub fn trimmed_key(&self) -> &str {
        self.key.trim()
    }
}

/// Header rows in the order the user entered them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    rows: Vec<Header>,
}

impl Headers {
    /// No headers.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Appends `header` after the existing rows.
    pub fn add(&mut self, header: Header) {
        self.rows.push(header);
    }

    /// Enabled rows, in order.
    pub fn enabled(&self) -> impl Iterator<Item = &Header> {
        self.rows.iter().filter(|h| h.enabled)
    }

    /// `(trimmed key, value)` for every enabled row, ready to be written out.
    pub fn emitted(&self) -> impl Iterator<Item = (&str, &str)> {
        self.enabled().map(|h| (h.trimmed_key(), h.value.as_str()))
    }

    /// Every row, disabled ones included.
    #[must_use]
    pub fn as_slice(&self) -> &[Header] {
        &self.rows
    }
}

impl FromIterator<Header> for Headers {
    fn from_iter<T: IntoIterator<Item = Header>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_disabled_keeps_key_and_value() {
        let header = Header::disabled("X-Debug", "true");
        assert_eq!(header.key, "X-Debug");
        assert_eq!(header.value, "true");
        assert!(!header.enabled);
    }

    #[test]
    fn test_enabled_flag_defaults_to_true() {
        let header: Header = serde_json::from_str(r#"{"key": "Accept", "value": "*/*"}"#).unwrap();
        assert_eq!(header, Header::new("Accept", "*/*"));
    }

    #[test]
    fn test_emitted_skips_disabled_and_trims_keys() {
        let headers: Headers = [
            Header::new("  Accept ", "application/json"),
            Header::disabled("X-Debug", "true"),
            Header::new("User-Agent", "  Unisnip  "),
        ]
        .into_iter()
        .collect();

        let emitted: Vec<_> = headers.emitted().collect();
        assert_eq!(
            emitted,
            vec![("Accept", "application/json"), ("User-Agent", "  Unisnip  ")]
        );
        assert_eq!(headers.as_slice().len(), 3);
    }
}
