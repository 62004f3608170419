//! HTML neutralization and escape-sequence placeholders.
//!
//! Escaped metacharacters (`\\`, `\*`, `\_`, `\#`) and literal `&` are swapped
//! for placeholder tokens before Markdown recognition and swapped back
//! afterwards. A token is `SENTINEL` followed by a one-letter code. A
//! sentinel the user typed is itself turned into a token, so placeholder
//! tokens never collide with user text.

/// Private-use character that opens every placeholder token.
const SENTINEL: char = '\u{E000}';

/// A literal hidden from Markdown recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Protected {
    Backslash,
    Asterisk,
    Underscore,
    Hash,
    Ampersand,
    Sentinel,
}

impl Protected {
    const ALL: [Self; 6] = [
        Self::Backslash,
        Self::Asterisk,
        Self::Underscore,
        Self::Hash,
        Self::Ampersand,
        Self::Sentinel,
    ];

    const fn code(self) -> char {
        match self {
            Self::Backslash => 'b',
            Self::Asterisk => 'a',
            Self::Underscore => 'u',
            Self::Hash => 'h',
            Self::Ampersand => 'm',
            Self::Sentinel => 's',
        }
    }

    const fn literal(self) -> char {
        match self {
            Self::Backslash => '\\',
            Self::Asterisk => '*',
            Self::Underscore => '_',
            Self::Hash => '#',
            Self::Ampersand => '&',
            Self::Sentinel => SENTINEL,
        }
    }

    fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Match the character following a backslash.
    fn escaped(next: char) -> Option<Self> {
        match next {
            '\\' => Some(Self::Backslash),
            '*' => Some(Self::Asterisk),
            '_' => Some(Self::Underscore),
            '#' => Some(Self::Hash),
            _ => None,
        }
    }
}

/// Encode `<` and `>` as HTML entities.
///
/// This is the first stage of [`to_html`](crate::to_html): afterwards no `<`
/// or `>` from the input remains. Other characters, `&` included, are left
/// alone.
///
/// # Examples
///
/// ```
/// use fmd_renderer::escape_html;
///
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html("a & b"), "a & b");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Replace escape sequences, `&` and stray sentinels with placeholder tokens.
///
/// Backslash pairs are consumed left to right, so `\\*` is an escaped
/// backslash followed by a bare `*`.
pub(crate) fn protect_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        let protected = match ch {
            SENTINEL => Some(Protected::Sentinel),
            '&' => Some(Protected::Ampersand),
            '\\' => {
                let escaped = chars.peek().copied().and_then(Protected::escaped);
                if escaped.is_some() {
                    chars.next();
                }
                escaped
            }
            _ => None,
        };
        match protected {
            Some(protected) => {
                out.push(SENTINEL);
                out.push(protected.code());
            }
            None => out.push(ch),
        }
    }
    out
}

/// Turn every placeholder token back into its literal character.
///
/// Runs in one pass, so a restored `*` or `#` is never seen by a Markdown
/// stage.
pub(crate) fn restore_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != SENTINEL {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(code) => match Protected::from_code(code) {
                Some(protected) => out.push(protected.literal()),
                None => {
                    out.push(ch);
                    out.push(code);
                }
            },
            None => out.push(ch),
        }
    }
    out
}
