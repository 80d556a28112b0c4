//! LaTeX-to-HTML cleanup pipeline for data file fields.
//!
//! Each cleanup pass is a function `&str -> String` applied in sequence.
//! Order matters: later passes see text exposed by earlier ones.

use std::sync::LazyLock;

use regex::Regex;

/// Run the full cleanup pipeline on a raw field value.
pub(crate) fn run_pipeline(text: &str) -> String {
    let mut result = text.to_string();

    result = unescape_ampersands(&result);
    result = unescape_underscores(&result);
    result = en_dashes(&result);
    result = lambda_symbols(&result);
    result = c_acute(&result);
    result = drop_urls(&result);
    result = drop_footnotes(&result);
    result = unwrap_underlines(&result);

    result
}

// ---------------------------------------------------------------------------
// Passes 1-5: literal replacements
// ---------------------------------------------------------------------------

/// `\&` -> `&`
fn unescape_ampersands(text: &str) -> String {
    text.replace(r"\&", "&")
}

/// `\_` -> `_`
fn unescape_underscores(text: &str) -> String {
    text.replace(r"\_", "_")
}

/// `--` -> en-dash entity.
fn en_dashes(text: &str) -> String {
    text.replace("--", "&#8211;")
}

/// Superscript lambda in math mode.
fn lambda_symbols(text: &str) -> String {
    text.replace(r"$^\lambda$", "&lambda;")
}

/// Acute c, as in Polish and Croatian names.
fn c_acute(text: &str) -> String {
    text.replace(r"\'{c}", "&cacute;")
}

// ---------------------------------------------------------------------------
// Passes 6-8: brace spans
// ---------------------------------------------------------------------------
//
// Spans end at the first `}`, so a nested brace group truncates the match
// and leaves its tail behind. Existing data relies on this.

/// Remove `\url{...}` including its content.
fn drop_urls(text: &str) -> String {
    static URL_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\\url\{.*?\}").expect("valid regex"));

    URL_RE.replace_all(text, "").into_owned()
}

/// Remove `\footnote{...}` including its content.
fn drop_footnotes(text: &str) -> String {
    static FOOTNOTE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\\footnote\{.*?\}").expect("valid regex"));

    FOOTNOTE_RE.replace_all(text, "").into_owned()
}

/// Replace `\ul{...}` with its content.
fn unwrap_underlines(text: &str) -> String {
    static UL_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\\ul\{(.*?)\}").expect("valid regex"));

    UL_RE.replace_all(text, "${1}").into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
