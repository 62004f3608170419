//! Re-emission of entity-encoded `<span>` tags.
//!
//! Runs on text that has already been through [`escape_html`](crate::escape_html),
//! so a span typed by the user looks like `&lt;span ...&gt;...&lt;/span&gt;`.
//! Only the first `style` attribute survives.

use std::sync::LazyLock;

use regex::Regex;

/// Encoded opening tag up to the start of its attributes.
static SPAN_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&lt;\s?span").unwrap());

/// Remainder of an encoded closing tag after `&lt;/`.
static SPAN_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s?span\s?&gt;").unwrap());

/// First single- or double-quoted `style` attribute, leading space included.
static STYLE_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#" style=(?:"[^"']*"|'[^"']*')"#).unwrap());

const ENCODED_CLOSER: &str = "&lt;/";
const ENCODED_LT: &str = "&lt;";
const ENCODED_GT: &str = "&gt;";

/// Outcome of examining one candidate opener.
enum Candidate<'a> {
    /// A complete span ending at byte `end` of the scanned text.
    Span {
        attrs: &'a str,
        content: &'a str,
        end: usize,
    },
    /// No span starts before the given byte.
    Skip(usize),
}

/// Replace encoded spans with real `<span>` tags.
///
/// A span is recognized only when its content is non-empty, fits on one line
/// and contains no other closing tag. Anything else is left encoded.
///
/// Attributes run up to the last `&gt;` before the first `/` on the line,
/// falling back to the previous `&gt;` when that would leave the content
/// empty. Every byte is examined a bounded number of times.
pub(crate) fn restore_spans(text: &str) -> String {
    if !text.contains(ENCODED_CLOSER) {
        return text.to_owned();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = SPAN_OPEN_RE.find(rest) {
        match match_span(rest, open.end()) {
            Candidate::Span { attrs, content, end } => {
                out.push_str(&rest[..open.start()]);
                out.push_str("<span");
                out.push_str(style_attribute(attrs));
                out.push('>');
                out.push_str(content);
                out.push_str("</span>");
                rest = &rest[end..];
            }
            Candidate::Skip(resume) => {
                out.push_str(&rest[..resume]);
                rest = &rest[resume..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Match the attributes, content and closing tag of an opener whose
/// attributes start at byte `attrs_start` of `text`.
///
/// On failure the resume point also rules out every later opener that
/// starts before it: those share the same closer, and their attributes are
/// a suffix of this opener's.
fn match_span(text: &str, attrs_start: usize) -> Candidate<'_> {
    let attrs_end = next_slash_or_newline(text, attrs_start);
    let attrs = &text[attrs_start..attrs_end];
    let Some(last_gt) = attrs.rfind(ENCODED_GT) else {
        return Candidate::Skip(attrs_end);
    };

    // First `&lt;/` on the line. Its slash is at or after `attrs_end`.
    let mut slash = attrs_end;
    let close_at = loop {
        if text.as_bytes().get(slash) != Some(&b'/') {
            return Candidate::Skip(slash);
        }
        if text[..slash].ends_with(ENCODED_LT) {
            break slash - ENCODED_LT.len();
        }
        slash = next_slash_or_newline(text, slash + 1);
    };
    let tail_start = close_at + ENCODED_CLOSER.len();
    let Some(close) = SPAN_CLOSE_RE.find(&text[tail_start..]) else {
        return Candidate::Skip(tail_start);
    };

    // Only the last `&gt;` can sit directly against the closer.
    let gt = if attrs_start + last_gt + ENCODED_GT.len() < close_at {
        last_gt
    } else {
        match attrs[..last_gt].rfind(ENCODED_GT) {
            Some(gt) => gt,
            None => return Candidate::Skip(tail_start),
        }
    };

    Candidate::Span {
        attrs: &attrs[..gt],
        content: &text[attrs_start + gt + ENCODED_GT.len()..close_at],
        end: tail_start + close.end(),
    }
}

fn next_slash_or_newline(text: &str, from: usize) -> usize {
    text[from..].find(['/', '\n']).map_or(text.len(), |i| from + i)
}

fn style_attribute(attrs: &str) -> &str {
    STYLE_ATTR_RE.find(attrs).map_or("", |m| m.as_str())
}
