//! The text-to-HTML pipeline.

use crate::escape::{escape_html, protect_escapes, restore_escapes};
use crate::inline::render_inline;
use crate::list::{wrap_ordered_lists, wrap_unordered_lists};
use crate::paragraph::wrap_paragraphs;
use crate::span::restore_spans;

type Stage = fn(&str) -> String;

/// Pipeline stages in execution order.
///
/// Each stage consumes the previous stage's output:
/// - `neutralize`: no `<` or `>` from the input survives
/// - `spans`: the only raw tags are `<span>` with at most a `style` attribute
/// - `protect`: escaped metacharacters and `&` become placeholder tokens
/// - `inline`, `unordered_lists`, `ordered_lists`: emit markup for unescaped syntax
/// - `restore`: placeholders become literals again, after all Markdown passes
/// - `paragraphs`: `<p>` and `<br>` from the remaining newlines
const STAGES: [(&str, Stage); 8] = [
    ("neutralize", escape_html),
    ("spans", restore_spans),
    ("protect", protect_escapes),
    ("inline", render_inline),
    ("unordered_lists", wrap_unordered_lists),
    ("ordered_lists", wrap_ordered_lists),
    ("restore", restore_escapes),
    ("paragraphs", wrap_paragraphs),
];

/// Convert form label or hint text to HTML.
///
/// Never fails: unmatched or malformed syntax is kept as literal, entity-encoded
/// text. The function holds no state and can be called from any thread.
///
/// # Examples
///
/// ```
/// use fmd_renderer::to_html;
///
/// assert_eq!(to_html("### Title"), "<h3>Title</h3>");
/// assert_eq!(to_html("* a\n* b"), "<ul><li>a</li><li>b</li></ul>");
/// assert_eq!(to_html(r"\*literal\*"), "*literal*");
/// assert_eq!(to_html(""), "");
/// ```
#[must_use]
pub fn to_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut html = text.to_owned();
    for (name, stage) in STAGES {
        html = stage(&html);
        tracing::trace!(stage = name, len = html.len(), "Applied stage");
    }

    tracing::debug!(
        input_len = text.len(),
        output_len = html.len(),
        "Converted text to HTML"
    );
    html
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html(""), "");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(to_html("What is your age?"), "What is your age?");
    }

    #[test]
    fn test_script_is_escaped() {
        let html = to_html("<script>alert('x')</script>");
        assert!(!html.contains("<script"));
        assert_eq!(html, "&lt;script&gt;alert('x')&lt;/script&gt;");
    }

    #[test]
    fn test_escaped_emphasis_is_literal() {
        let html = to_html(r"\*not emphasis\*");
        assert_eq!(html, "*not emphasis*");
        assert!(!html.contains("<em>"));
    }

    #[test]
    fn test_emphasis_and_strong() {
        assert_eq!(to_html("*hello*"), "<em>hello</em>");
        assert_eq!(to_html("**hello**"), "<strong>hello</strong>");
    }

    #[test]
    fn test_header() {
        assert_eq!(to_html("### Title"), "<h3>Title</h3>");
    }

    #[test]
    fn test_escaped_hash_is_not_header() {
        assert_eq!(to_html(r"\# not a header"), "# not a header");
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(to_html("* a\n* b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            to_html("1. one\n2. two"),
            "<ol><li>one</li><li>two</li></ol>"
        );
    }

    #[test]
    fn test_list_items_with_inline_markup() {
        assert_eq!(
            to_html("* **yes**\n* [no](http://n.o)"),
            r#"<ul><li><strong>yes</strong></li><li><a href="http://n.o" target="_blank">no</a></li></ul>"#
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            to_html("[go](http://x.com)"),
            r#"<a href="http://x.com" target="_blank">go</a>"#
        );
    }

    #[test]
    fn test_link_with_query_ampersand() {
        assert_eq!(
            to_html("[q](http://x.com/?a=1&b=2)"),
            r#"<a href="http://x.com/?a=1&b=2" target="_blank">q</a>"#
        );
    }

    #[test]
    fn test_span_style_kept() {
        assert_eq!(
            to_html(r#"<span class="x" style="color:red">hi</span>"#),
            r#"<span style="color:red">hi</span>"#
        );
    }

    #[test]
    fn test_span_with_markdown_content() {
        assert_eq!(
            to_html(r#"<span style="color:blue">*note*</span>"#),
            r#"<span style="color:blue"><em>note</em></span>"#
        );
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(
            to_html("line one\n\nline two"),
            "<p>line one</p><p>line two</p>"
        );
    }

    #[test]
    fn test_line_break() {
        assert_eq!(to_html("first\nsecond"), "first<br>second");
    }

    #[test]
    fn test_header_then_text() {
        assert_eq!(to_html("# Intro\nbody"), "<h1>Intro</h1>body");
    }

    #[test]
    fn test_header_then_list() {
        assert_eq!(
            to_html("## Pick\n* a\n* b"),
            "<h2>Pick</h2><ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn test_paragraph_then_list() {
        assert_eq!(
            to_html("Choose:\n\n- red\n- blue\n\nThanks"),
            "<p>Choose:</p><ul><li>red</li><li>blue</li></ul><p>Thanks</p>"
        );
    }

    #[test]
    fn test_escapes_survive_all_stages() {
        assert_eq!(
            to_html(r"snake\_case and 2\*3 and C:\\dir"),
            r"snake_case and 2*3 and C:\dir"
        );
    }

    #[test]
    fn test_escaped_underscore_inside_emphasis() {
        assert_eq!(to_html(r"_a\_b_"), "<em>a_b</em>");
    }

    #[test]
    fn test_restored_markers_not_reinterpreted() {
        assert_eq!(to_html(r"\*\*bold\*\*"), "**bold**");
        assert_eq!(to_html(r"\_\_x\_\_"), "__x__");
    }

    #[test]
    fn test_ampersand_round_trips() {
        assert_eq!(to_html("Fish & chips"), "Fish & chips");
        assert_eq!(to_html("&amp; &35; &42;"), "&amp; &35; &42;");
    }

    #[test]
    fn test_private_use_input_round_trips() {
        let text = "x \u{E000}a \u{E000}";
        assert_eq!(to_html(text), text);
    }

    #[test]
    fn test_unmatched_syntax_is_literal() {
        assert_eq!(to_html("a * b"), "a * b");
        assert_eq!(to_html("[broken](link"), "[broken](link");
        assert_eq!(to_html("# "), "<h1></h1>");
    }

    #[test]
    fn test_unicode_text() {
        assert_eq!(to_html("*привет* 世界"), "<em>привет</em> 世界");
    }

    #[test]
    fn test_pathological_input_does_not_panic() {
        let inputs = [
            "*".repeat(1000),
            "_".repeat(1000),
            "#".repeat(50),
            "[".repeat(200) + &"](".repeat(200),
            "\\".repeat(101),
            "<span>".repeat(100),
            "\n".repeat(100),
            "&lt;span&gt;x&lt;/span&gt;".to_owned(),
            "\u{E000}".repeat(10),
        ];
        for input in &inputs {
            let _ = to_html(input);
        }
    }

    #[test]
    fn test_styled_span_with_arrow_content() {
        assert_eq!(
            to_html(r#"Go <span style="color:red">-></span> next"#),
            r#"Go <span style="color:red">-&gt;</span> next"#
        );
    }

    #[test]
    fn test_unclosed_span_openers_render_in_linear_time() {
        let input = "<span>".repeat(20_000) + "</";

        let start = Instant::now();
        let html = to_html(&input);

        assert!(start.elapsed() < Duration::from_secs(2));
        assert_eq!(html, escape_html(&input));
    }

    #[test]
    fn test_no_raw_angle_brackets_from_input() {
        let html = to_html("<img src=x onerror=alert(1)> <b>b</b>\n\n<div>");
        let stripped = html
            .replace("<p>", "")
            .replace("</p>", "")
            .replace("<strong>", "");
        assert!(!stripped.contains('<'));
        assert!(!stripped.contains('>'));
    }
}
