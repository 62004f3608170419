//! Single-level list blocks.

/// List flavour, selected by the item marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    /// `* `, `+ ` or `- ` items, rendered as `<ul>`.
    Unordered,
    /// `1. ` items, rendered as `<ol>`. Source numbers are not preserved.
    Ordered,
}

impl ListKind {
    const fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }

    /// Return the item text if `line` starts with this kind's marker.
    fn item_text(self, line: &str) -> Option<&str> {
        match self {
            Self::Unordered => line.strip_prefix(['*', '+', '-'])?.strip_prefix(' '),
            Self::Ordered => {
                let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
                if rest.len() == line.len() {
                    return None;
                }
                rest.strip_prefix(". ")
            }
        }
    }
}

/// Collapse each run of consecutive item lines into one list element.
///
/// The newline before a run is consumed so the list attaches to the preceding
/// line, unless that line is blank: a blank line stays a paragraph break.
/// Nested markers and indentation are plain item text.
pub(crate) fn wrap_lists(text: &str, kind: ListKind) -> String {
    let mut out = String::with_capacity(text.len());
    let mut items: Vec<&str> = Vec::new();
    let mut previous_blank = false;

    for (index, line) in text.split('\n').enumerate() {
        if let Some(item) = kind.item_text(line) {
            if items.is_empty() && index > 0 && previous_blank {
                out.push('\n');
            }
            items.push(item.trim());
            continue;
        }

        push_list(&mut out, kind, &items);
        items.clear();
        if index > 0 {
            out.push('\n');
        }
        out.push_str(line);
        previous_blank = line.is_empty();
    }
    push_list(&mut out, kind, &items);

    out
}

pub(crate) fn wrap_unordered_lists(text: &str) -> String {
    wrap_lists(text, ListKind::Unordered)
}

pub(crate) fn wrap_ordered_lists(text: &str) -> String {
    wrap_lists(text, ListKind::Ordered)
}

fn push_list(out: &mut String, kind: ListKind, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    let tag = kind.tag();
    out.push('<');
    out.push_str(tag);
    out.push('>');
    for item in items {
        out.push_str("<li>");
        out.push_str(item);
        out.push_str("</li>");
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
