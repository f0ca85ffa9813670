//! Raw URL parser.
//!
//! Splits a URL as typed into a request editor into a [`Url`]. Separators
//! inside `{{placeholders}}` are ignored, so `{{base_url}}/users` keeps its
//! variable intact. No validation or decoding is done.

use std::ops::Range;

use unisnip_application::placeholder::split_placeholders;
use unisnip_domain::{QueryParam, QueryParams, Url, UrlAuth};

/// Parses `raw` into its URL parts. An empty string gives an empty [`Url`].
#[must_use]
pub fn parse_raw_url(raw: &str) -> Url {
    let mut rest = raw.trim();
    let mut url = Url::default();
    if rest.is_empty() {
        return url;
    }

    if let Some(i) = find_outside(rest, "#") {
        url.hash = Some(rest[i + 1..].to_string()).filter(|h| !h.is_empty());
        rest = &rest[..i];
    }

    if let Some(i) = find_outside(rest, "?") {
        url.query = parse_query(&rest[i + 1..]);
        rest = &rest[..i];
    }

    if let Some(i) = find_outside(rest, "://") {
        url.protocol = Some(rest[..i].to_string());
        rest = &rest[i + 3..];
    }

    let (mut authority, path) = match find_outside(rest, "/") {
        Some(i) => (&rest[..i], Some(&rest[i + 1..])),
        None => (rest, None),
    };

    if let Some(i) = rfind_outside(authority, "@") {
        let userinfo = &authority[..i];
        authority = &authority[i + 1..];
        url.auth = Some(match find_outside(userinfo, ":") {
            Some(j) => UrlAuth::new(&userinfo[..j], Some(userinfo[j + 1..].to_string())),
            None => UrlAuth::new(userinfo, None),
        });
    }

    if let Some(i) = rfind_outside(authority, ":") {
        url.port = Some(authority[i + 1..].to_string());
        authority = &authority[..i];
    }

    url.host = split_host(authority);
    if let Some(path) = path {
        url.path = split_path(path);
    }

    url
}

/// Splits a host on `.`, leaving placeholders whole.
#[must_use]
pub fn split_host(host: &str) -> Vec<String> {
    if host.is_empty() {
        return Vec::new();
    }
    split_outside(host, '.')
}

/// Splits a path on `/`, leaving placeholders whole. One leading slash is
/// ignored.
#[must_use]
pub fn split_path(path: &str) -> Vec<String> {
    let path = path.strip_prefix('/').unwrap_or(path);
    if path.is_empty() {
        return Vec::new();
    }
    split_outside(path, '/')
}

fn parse_query(query: &str) -> QueryParams {
    split_outside(query, '&')
        .into_iter()
        .filter(|pair| !pair.is_empty())
        .map(|pair| match find_outside(&pair, "=") {
            Some(i) => QueryParam::new(&pair[..i], &pair[i + 1..]),
            None => QueryParam::key_only(pair),
        })
        .collect()
}

fn literal_ranges(input: &str) -> Vec<Range<usize>> {
    let mut offset = 0;
    let mut ranges = Vec::new();
    for segment in split_placeholders(input).segments {
        let len = segment.as_str().len();
        if !segment.is_placeholder() {
            ranges.push(offset..offset + len);
        }
        offset += len;
    }
    ranges
}

fn find_outside(input: &str, pattern: &str) -> Option<usize> {
    literal_ranges(input)
        .into_iter()
        .find_map(|range| input[range.clone()].find(pattern).map(|i| range.start + i))
}

fn rfind_outside(input: &str, pattern: &str) -> Option<usize> {
    literal_ranges(input)
        .into_iter()
        .rev()
        .find_map(|range| input[range.clone()].rfind(pattern).map(|i| range.start + i))
}

fn split_outside(input: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut start = 0;
    for range in literal_ranges(input) {
        for (i, _) in input[range.clone()].match_indices(separator) {
            let at = range.start + i;
            parts.push(input[start..at].to_string());
            start = at + separator.len_utf8();
        }
    }
    parts.push(input[start..].to_string());
    parts
}
