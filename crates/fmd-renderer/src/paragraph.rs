//! Paragraph wrapping and line breaks.

use std::sync::LazyLock;

use regex::Regex;

static PARAGRAPH_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Blocks that already start with a block-level tag are not wrapped.
static BLOCK_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^</?(?:ul|ol|li|h|p|bl)").unwrap());

/// Wrap blank-line separated blocks in `<p>` and turn newlines into `<br>`.
///
/// Text without a blank line is a single unwrapped block.
pub(crate) fn wrap_paragraphs(text: &str) -> String {
    if !PARAGRAPH_BREAK_RE.is_match(text) {
        return break_lines(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for block in PARAGRAPH_BREAK_RE.split(text) {
        let trimmed = block.trim();
        if trimmed.is_empty() {
            continue;
        }
        if BLOCK_TAG_RE.is_match(trimmed) {
            out.push_str(&break_lines(block));
        } else {
            out.push_str("<p>");
            out.push_str(&break_lines(trimmed));
            out.push_str("</p>");
        }
    }
    out
}

/// Replace each newline that ends a non-empty line with `<br>`.
///
/// A newline right after a closing header tag is dropped instead.
fn break_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch != '\n' {
            out.push(ch);
            continue;
        }
        if ends_with_header(&out) {
            continue;
        }
        if out.is_empty() || out.ends_with('\n') {
            out.push('\n');
        } else {
            out.push_str("<br>");
        }
    }
    out
}

fn ends_with_header(html: &str) -> bool {
    matches!(
        html.as_bytes(),
        [.., b'<', b'/', b'h', b'1'..=b'6', b'>']
    )
}
