//! Form label and hint Markdown to safe HTML.
//!
//! This crate converts the restricted Markdown dialect used in form label and
//! hint text into minimal HTML that is safe to inject into a page. The entry
//! point is [`to_html`], a total function: every input produces output and
//! malformed markup degrades to literal text.
//!
//! # Supported syntax
//!
//! - `**strong**`, `__strong__`, `*emphasis*`, `_emphasis_`
//! - `[label](url)` links, opened in a new tab
//! - `#` to `######` headers
//! - single-level `*`/`+`/`-` and `1.` lists
//! - `<span style="...">` (all other attributes are dropped)
//! - `\\`, `\*`, `\_`, `\#` escapes
//! - blank-line separated paragraphs and `<br>` line breaks
//!
//! Any other HTML is entity-encoded.
//!
//! # Example
//!
//! ```
//! use fmd_renderer::to_html;
//!
//! assert_eq!(to_html("**Age** in _years_"), "<strong>Age</strong> in <em>years</em>");
//! assert_eq!(to_html("<b>x</b>"), "&lt;b&gt;x&lt;/b&gt;");
//! ```

mod escape;
mod inline;
mod list;
mod paragraph;
mod renderer;
mod span;

pub use escape::escape_html;
pub use renderer::to_html;
