//! Safe HTML rendering for assistant chat messages.
//!
//! Transforms a constrained Markdown-like markup language, as produced by an
//! assistant participant in a chat, into an HTML fragment restricted to an
//! allow-listed tag vocabulary (`p`, `br`, `strong`, `em`, `code`, `pre`,
//! `h1`-`h3`, `blockquote`, `ul`, `li`, `a`). The input is untrusted; the
//! output is safe to insert into a display surface directly.
//!
//! # Pipeline
//!
//! Parsing is staged rather than applied as sequential whole-document
//! rewrites: fenced code blocks are extracted first, remaining lines are
//! classified into typed block nodes, adjacent list items are grouped into a
//! single container, and the inline transforms (code spans, links, emphasis)
//! run only over text leaves. Block extraction therefore permanently
//! protects code content from the inline passes.
//!
//! Malformed markup never fails: an unterminated fence, an unmatched
//! emphasis marker or a rejected link target all degrade to literal escaped
//! text. The only error condition is exceeding the configured input length
//! cap.
//!
//! # Example
//!
//! ```
//! let html = chatdown_render::render("# Hi\n\n**bold** text").unwrap();
//! assert_eq!(html, "<h1>Hi</h1>\n<p><strong>bold</strong> text</p>");
//! ```

mod block;
mod escape;
mod html;
mod inline;
mod link;
mod renderer;

pub use escape::{escape_attr, escape_html};
pub use link::{LinkError, LinkTarget};
pub use renderer::{DEFAULT_MAX_INPUT_LEN, RenderError, RenderResult, Renderer, render};
