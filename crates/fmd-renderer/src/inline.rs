//! Inline constructs: strong, emphasis, links and headers.
//!
//! Patterns are applied one after another in a fixed order and every pattern
//! is confined to a single line. Escaped metacharacters are placeholder
//! tokens at this point and never match.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static STRONG_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());

static STRONG_ASTERISK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Emphasis body must not start with whitespace.
static EM_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(\S[^_\n]*)_").unwrap());

static EM_ASTERISK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(\S[^*\n]*)\*").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]*)\]\(([^)\n]+)\)").unwrap());

/// Header line: 1-6 hashes, optional space, then content not starting with `#`.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(#{1,6})\s?([^#].*)$").unwrap());

/// Apply all inline patterns in order.
pub(crate) fn render_inline(text: &str) -> String {
    let html = STRONG_UNDERSCORE_RE.replace_all(text, "<strong>$1</strong>");
    let html = STRONG_ASTERISK_RE.replace_all(&html, "<strong>$1</strong>");
    let html = EM_UNDERSCORE_RE.replace_all(&html, "<em>$1</em>");
    let html = EM_ASTERISK_RE.replace_all(&html, "<em>$1</em>");
    let html = LINK_RE.replace_all(&html, |caps: &Captures| {
        format!(
            r#"<a href="{}" target="_blank">{}</a>"#,
            caps[2].replace('"', "&quot;"),
            &caps[1]
        )
    });
    render_headers(&html)
}

/// Turn header lines into `<h1>`..`<h6>`, keeping line structure intact.
fn render_headers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        match HEADER_RE.captures(line) {
            Some(caps) => {
                let level = caps[1].len();
                let content = caps[2].trim_end_matches('#').trim_end();
                write!(out, "<h{level}>{content}</h{level}>").unwrap();
            }
            None => out.push_str(line),
        }
    }
    out
}
