//! Markup normalization for CV data fields.
//!
//! Data files are shared with a LaTeX CV, so free-text columns carry LaTeX
//! escapes and spans. [`fix_latex`] turns them into text that can be
//! embedded in HTML as-is. The role helpers split the combined role column
//! of event rows.

mod cleanup;

use std::sync::LazyLock;

use regex::Regex;
use tracing::{instrument, trace};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Clean a raw field value for HTML embedding.
///
/// Applies, in order: `\&` and `\_` unescaping, `--` to `&#8211;`,
/// `$^\lambda$` to `&lambda;`, `\'{c}` to `&cacute;`, removal of
/// `\url{...}` and `\footnote{...}` spans, and unwrapping of `\ul{...}`.
/// Everything else is left untouched. Not idempotent in general.
#[instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn fix_latex(text: &str) -> String {
    let cleaned = cleanup::run_pipeline(text);
    if cleaned != text {
        trace!(before = text, after = %cleaned, "normalized field");
    }
    cleaned
}

/// Remove parenthetical annotations such as `(local)`, non-greedy.
pub fn strip_parentheticals(text: &str) -> String {
    static PAREN_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\(.*?\)").expect("valid regex"));

    PAREN_RE.replace_all(text, "").into_owned()
}

/// Split a combined role string on `", "` and `" & "`.
///
/// Pieces are not trimmed: whitespace left behind by a stripped annotation
/// stays on the neighbouring role.
pub fn split_roles(text: &str) -> Vec<String> {
    static SEP_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r", | & ").expect("valid regex"));

    SEP_RE.split(text).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_latex_full_example() {
        assert_eq!(
            fix_latex(r"\ul{Smith, J.} \& Jones\footnote{equal} -- \url{http://x.y}"),
            "Smith, J. & Jones &#8211; "
        );
    }

    #[test]
    fn strip_parentheticals_non_greedy() {
        assert_eq!(
            strip_parentheticals("Chair (local), Member (PC) & Reviewer"),
            "Chair , Member  & Reviewer"
        );
    }

    #[test]
    fn split_roles_on_comma_and_ampersand() {
        assert_eq!(
            split_roles("Chair, Member & Reviewer"),
            vec!["Chair", "Member", "Reviewer"]
        );
    }

    #[test]
    fn split_roles_keeps_untrimmed_pieces() {
        let roles = split_roles(&strip_parentheticals("Chair (local), Member"));
        assert_eq!(roles, vec!["Chair ", "Member"]);
    }

    #[test]
    fn split_roles_single_role() {
        assert_eq!(split_roles("Organizer"), vec!["Organizer"]);
    }

    #[test]
    fn bare_comma_is_not_a_separator() {
        assert_eq!(split_roles("Chair,Member"), vec!["Chair,Member"]);
    }
}
