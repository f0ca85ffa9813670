//! Postman to request mapping
//!
//! Converts Postman request types into the [`Request`] model. Disabled
//! entries are carried over with `enabled = false`; generators skip them.

use unisnip_domain::{
    FormDataField, Header, Headers, PathVariable, QueryParam, QueryParams, Request, RequestBody,
    Url, UrlAuth, UrlEncodedField,
};

use super::types::{
    PostmanBody, PostmanHeader, PostmanQueryParam, PostmanRequest, PostmanSegments, PostmanUrl,
    PostmanUrlStructured,
};
use super::url_parser::{parse_raw_url, split_host, split_path};

impl PostmanRequest {
    /// Converts this Postman request into a [`Request`].
    #[must_use]
    pub fn into_request(self) -> Request {
        Request {
            method: self.method,
            url: map_url(self.url),
            headers: map_headers(&self.header),
            body: self.body.and_then(map_body),
        }
    }
}

/// Map a Postman URL, raw or structured.
#[must_use]
pub fn map_url(url: PostmanUrl) -> Url {
    match url {
        PostmanUrl::Empty => Url::default(),
        PostmanUrl::Simple(raw) => parse_raw_url(&raw),
        PostmanUrl::Structured(structured) if structured.has_components() => {
            map_structured_url(structured)
        }
        PostmanUrl::Structured(structured) => {
            parse_raw_url(structured.raw.as_deref().unwrap_or_default())
        }
    }
}

fn map_structured_url(url: PostmanUrlStructured) -> Url {
    Url {
        protocol: url.protocol.filter(|p| !p.is_empty()),
        auth: url.auth.map(|auth| UrlAuth::new(auth.user, auth.password)),
        host: match url.host {
            Some(PostmanSegments::Joined(host)) => split_host(&host),
            Some(PostmanSegments::Parts(parts)) => parts,
            None => Vec::new(),
        },
        port: url.port.filter(|p| !p.is_empty()),
        path: match url.path {
            Some(PostmanSegments::Joined(path)) => split_path(&path),
            Some(PostmanSegments::Parts(parts)) => parts,
            None => Vec::new(),
        },
        query: map_query_params(&url.query),
        hash: url.hash.filter(|h| !h.is_empty()),
        variables: url
            .variable
            .into_iter()
            .filter_map(|v| v.value.map(|value| PathVariable::new(v.key, value)))
            .collect(),
    }
}

/// Map headers from Postman format
#[must_use]
pub fn map_headers(headers: &[PostmanHeader]) -> Headers {
    headers
        .iter()
        .map(|h| Header {
            key: h.key.clone(),
            value: h.value.clone(),
            enabled: !h.disabled,
        })
        .collect()
}

/// Map query parameters
#[must_use]
pub fn map_query_params(params: &[PostmanQueryParam]) -> QueryParams {
    params
        .iter()
        .map(|p| QueryParam {
            key: p.key.clone(),
            value: p.value.clone(),
            enabled: !p.disabled,
        })
        .collect()
}

/// Map body from Postman format
#[must_use]
pub fn map_body(body: PostmanBody) -> Option<RequestBody> {
    if body.disabled {
        return None;
    }

    match body.mode.as_str() {
        "raw" => Some(RequestBody::raw(body.raw.unwrap_or_default())),
        "urlencoded" => Some(RequestBody::url_encoded(
            body.urlencoded
                .into_iter()
                .map(|p| UrlEncodedField {
                    key: p.key,
                    value: p.value.unwrap_or_default(),
                    enabled: !p.disabled,
                })
                .collect(),
        )),
        "formdata" => Some(RequestBody::form_data(
            body.formdata
                .into_iter()
                .map(|p| {
                    let field = if p.is_file() {
                        FormDataField::file(p.key, p.src.unwrap_or_default())
                    } else {
                        FormDataField::text(p.key, p.value.unwrap_or_default())
                    };
                    if p.disabled { field.into_disabled() } else { field }
                })
                .collect(),
        )),
        "file" => Some(RequestBody::Binary {
            path: body.file.and_then(|f| f.src),
        }),
        "graphql" => body
            .graphql
            .map(|gql| RequestBody::graphql(gql.query, gql.variables)),
        other => {
            tracing::debug!(mode = other, "unknown body mode was skipped");
            None
        }
    }
}
