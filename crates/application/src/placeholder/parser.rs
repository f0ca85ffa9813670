//! Placeholder splitter for {{variable}} syntax
//!
//! Splits strings into literal runs and unresolved `{{...}}` placeholders so
//! that encoders can leave the placeholders untouched.

use std::ops::Range;

/// One run of a split string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any placeholder.
    Literal(&'a str),
    /// A complete placeholder, braces included.
    Placeholder(&'a str),
}

impl<'a> Segment<'a> {
    /// Returns the segment text as it appears in the input.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        match self {
            Self::Literal(s) | Self::Placeholder(s) => *s,
        }
    }

    /// Returns true for placeholder segments.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// Result of splitting a string on placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderSplit<'a> {
    /// Runs in input order; concatenated they reproduce the input.
    pub segments: Vec<Segment<'a>>,
    /// Byte ranges of `{{` markers that did not open a placeholder.
    pub unbalanced: Vec<Range<usize>>,
}

impl PlaceholderSplit<'_> {
    /// Returns true if some `{{` marker was left unmatched.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn has_unbalanced(&self) -> bool {
        !self.unbalanced.is_empty()
    }
}

/// Splits `input` into literal and placeholder runs.
///
/// Matching is a single left-to-right pass without nesting: a `{{` opens a
/// placeholder only if a `}}` follows before any other `{{`. Markers that do
/// not open a placeholder stay in the literal text and are listed in
/// [`PlaceholderSplit::unbalanced`].
///
/// # Examples
///
/// ```
/// use unisnip_application::placeholder::{Segment, split_placeholders};
///
/// let split = split_placeholders("a={{xyz}}&b");
/// assert_eq!(
///     split.segments,
///     vec![
///         Segment::Literal("a="),
///         Segment::Placeholder("{{xyz}}"),
///         Segment::Literal("&b"),
///     ]
/// );
/// assert!(split.unbalanced.is_empty());
/// ```
#[must_use]
pub fn split_placeholders(input: &str) -> PlaceholderSplit<'_> {
    let mut split = PlaceholderSplit::default();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find("{{") {
        let open = cursor + offset;
        let body_start = open + 2;
        let close = input[body_start..].find("}}").map(|i| body_start + i);
        let next_open = input[body_start..].find("{{").map(|i| body_start + i);

        match close {
            Some(close) if next_open.is_none_or(|next| next > close) => {
                if literal_start < open {
                    split
                        .segments
                        .push(Segment::Literal(&input[literal_start..open]));
                }
                let end = close + 2;
                split
                    .segments
                    .push(Segment::Placeholder(&input[open..end]));
                literal_start = end;
                cursor = end;
            }
            _ => {
                split.unbalanced.push(open..body_start);
                cursor = body_start;
            }
        }
    }

    if literal_start < input.len() {
        split.segments.push(Segment::Literal(&input[literal_start..]));
    }

    split
}
