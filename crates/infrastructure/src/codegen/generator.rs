//! Java Unirest snippet generator.
//!
//! A snippet is assembled from an ordered list of fragment builders. Each
//! builder looks at the shared [`RenderContext`] and returns its piece, which
//! may be empty; the pieces are joined once at the end.

use std::str::FromStr;

use serde_json::{Map, Value as JsonValue};
use thiserror::Error;
use unisnip_application::{OptionsError, sanitize_options};
use unisnip_domain::{
    CodeSnippet, Diagnostic, DiagnosticKind, GeneratorOptions, HttpMethod, Request,
};

use super::body::serialize_body;
use super::escape::escape_java;
use super::headers::serialize_headers;
use super::url::reconstruct_url;

/// Errors delivered by [`convert`] and [`try_convert`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The caller supplied options that do not match the option schema.
    #[error(transparent)]
    Options(#[from] OptionsError),
}

/// Result type alias for conversions.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Everything a fragment builder may read.
struct RenderContext<'a> {
    options: &'a GeneratorOptions,
    indent: String,
    method: HttpMethod,
    url: String,
    request: &'a Request,
}

type Fragment = fn(&RenderContext<'_>) -> String;

const FRAGMENTS: [Fragment; 6] = [
    timeout_fragment,
    redirect_fragment,
    request_line_fragment,
    headers_fragment,
    body_fragment,
    terminator_fragment,
];

fn timeout_fragment(ctx: &RenderContext<'_>) -> String {
    format!("Unirest.setTimeouts(0, {});\n", ctx.options.request_timeout)
}

fn redirect_fragment(ctx: &RenderContext<'_>) -> String {
    if ctx.options.follow_redirect {
        return String::new();
    }
    let i = &ctx.indent;
    format!(
        "Unirest.setHttpClient(org.apache.http.impl.client.HttpClients.custom()\n{i}.disableRedirectHandling()\n{i}.build());\n"
    )
}

fn request_line_fragment(ctx: &RenderContext<'_>) -> String {
    format!(
        "HttpResponse<String> response = Unirest.{}(\"{}\")\n",
        ctx.method.call_name(),
        escape_java(&ctx.url)
    )
}

fn headers_fragment(ctx: &RenderContext<'_>) -> String {
    serialize_headers(&ctx.request.headers, &ctx.indent)
}

fn body_fragment(ctx: &RenderContext<'_>) -> String {
    serialize_body(
        ctx.request.body.as_ref(),
        &ctx.indent,
        ctx.options.trim_request_body,
    )
}

fn terminator_fragment(ctx: &RenderContext<'_>) -> String {
    format!("{}.asString();\n", ctx.indent)
}

/// Generates Java Unirest code for requests.
pub struct UnirestGenerator<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> UnirestGenerator<'a> {
    /// Create a new generator with the given options.
    #[must_use]
    pub const fn new(options: &'a GeneratorOptions) -> Self {
        Self { options }
    }

    /// Generate the snippet for `request`.
    #[must_use]
    pub fn generate(&self, request: &Request) -> CodeSnippet {
        let mut diagnostics = Vec::new();
        let method = resolve_method(&request.method, &mut diagnostics);
        let reconstructed = reconstruct_url(&request.url);
        diagnostics.extend(reconstructed.diagnostics);

        let ctx = RenderContext {
            options: self.options,
            indent: self.options.indent(),
            method,
            url: reconstructed.url,
            request,
        };

        let snippet: String = FRAGMENTS.iter().map(|fragment| fragment(&ctx)).collect();
        let code = if self.options.include_boilerplate {
            wrap_boilerplate(&snippet, &ctx.indent, &self.options.indent_levels(2))
        } else {
            snippet
        };

        tracing::debug!(
            method = %method,
            bytes = code.len(),
            diagnostics = diagnostics.len(),
            "generated Unirest snippet"
        );

        CodeSnippet::new(code).with_diagnostics(diagnostics)
    }
}

fn resolve_method(method: &str, diagnostics: &mut Vec<Diagnostic>) -> HttpMethod {
    HttpMethod::from_str(method).unwrap_or_else(|_| {
        tracing::warn!(method, "method isn't supported by Unirest, falling back to GET");
        diagnostics.push(Diagnostic::warning(
            DiagnosticKind::UnsupportedMethod,
            format!("{method} method isn't supported by Unirest java library, using GET"),
        ));
        HttpMethod::Get
    })
}

/// Nests `snippet` inside `main`. Every piece of the snippet split on `\n`
/// gets the `inner` prefix, the empty piece after the final newline
/// included, so an indentation-only line precedes the footer.
fn wrap_boilerplate(snippet: &str, indent: &str, inner: &str) -> String {
    let body = snippet
        .split('\n')
        .map(|line| format!("{inner}{line}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "import com.konghq.unirest.*;\nimport java.io.*;\npublic class App {{\n{indent}public static void main(String []args) throws Exception{{\n\
         {body}\n\
         {inner}System.out.println(response.getBody());\n{indent}}}\n}}\n"
    )
}

/// Generate the Unirest snippet for `request` with typed options.
#[must_use]
pub fn generate_code(request: &Request, options: &GeneratorOptions) -> CodeSnippet {
    UnirestGenerator::new(options).generate(request)
}

/// Converts `request` with untyped caller options.
///
/// # Errors
///
/// Returns [`ConvertError::Options`] when an option value does not match its
/// declared type.
pub fn try_convert(
    request: &Request,
    options: &Map<String, JsonValue>,
) -> ConvertResult<CodeSnippet> {
    let options = sanitize_options(options)?;
    Ok(generate_code(request, &options))
}

/// Converts `request` and hands the outcome to `on_result`, returning
/// whatever the handler returns.
pub fn convert<F, R>(request: &Request, options: &Map<String, JsonValue>, on_result: F) -> R
where
    F: FnOnce(ConvertResult<CodeSnippet>) -> R,
{
    on_result(try_convert(request, options))
}
