//! The renderer: input bounds, pipeline staging and result shape.

use crate::block::parse_blocks;
use crate::escape::escape_html;
use crate::html;

/// Default cap on input length, in bytes.
///
/// Bounds worst-case scanning cost on pathological input. Callers that need
/// more can raise it with [`Renderer::with_max_input_len`].
pub const DEFAULT_MAX_INPUT_LEN: usize = 64 * 1024;

/// Rendering failure.
///
/// Malformed markup is never an error; it degrades to literal escaped text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Input exceeded the configured length cap. The caller can truncate
    /// and retry, or show the raw content instead.
    #[error("input length {len} exceeds maximum of {max} bytes")]
    InputTooLong {
        /// Actual input length in bytes.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Result of rendering one message.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML fragment, restricted to the allow-listed tag set.
    pub html: String,
    /// Content that degraded to literal text, e.g. rejected link targets.
    pub warnings: Vec<String>,
}

/// Markup renderer for assistant-authored message content.
///
/// Pure and stateless: rendering the same input always yields the same
/// fragment, so a single `Renderer` can be shared freely across call sites
/// and threads.
#[derive(Clone, Debug)]
pub struct Renderer {
    max_input_len: usize,
}

impl Renderer {
    /// Create a renderer with the default input length cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }

    /// Override the maximum accepted input length in bytes.
    #[must_use]
    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = max;
        self
    }

    /// Render markup content to a safe HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InputTooLong`] if `raw` exceeds the
    /// configured length cap. No other input can fail.
    pub fn render(&self, raw: &str) -> Result<RenderResult, RenderError> {
        self.check_len(raw)?;
        let blocks = parse_blocks(raw);
        let mut warnings = Vec::new();
        let html = html::emit(&blocks, &mut warnings);
        Ok(RenderResult { html, warnings })
    }

    /// Display user-authored text without interpreting any markup.
    ///
    /// Escapes the content and preserves line structure with `<p>` and
    /// `<br>`; markers such as `**` or backticks stay literal. This is the
    /// user side of the trust boundary: user text must never be
    /// escape-then-interpreted as markup.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InputTooLong`] if `raw` exceeds the
    /// configured length cap.
    pub fn render_plain(&self, raw: &str) -> Result<String, RenderError> {
        self.check_len(raw)?;
        let mut out = String::with_capacity(raw.len() + 16);
        for chunk in raw.split("\n\n") {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str("<p>");
            for (i, line) in chunk.split('\n').enumerate() {
                if i > 0 {
                    out.push_str("<br>");
                }
                out.push_str(&escape_html(line.trim()));
            }
            out.push_str("</p>");
        }
        Ok(out)
    }

    fn check_len(&self, raw: &str) -> Result<(), RenderError> {
        if raw.len() > self.max_input_len {
            return Err(RenderError::InputTooLong {
                len: raw.len(),
                max: self.max_input_len,
            });
        }
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render with default settings, discarding warnings.
///
/// # Errors
///
/// Returns [`RenderError::InputTooLong`] if `raw` exceeds
/// [`DEFAULT_MAX_INPUT_LEN`].
pub fn render(raw: &str) -> Result<String, RenderError> {
    Renderer::new().render(raw).map(|result| result.html)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render_html(raw: &str) -> String {
        render(raw).unwrap()
    }

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(render_html("Hello, world!"), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_rendering_is_idempotent_on_plain_text() {
        let first = render_html("just some text\nacross two lines");
        let second = render_html("just some text\nacross two lines");
        assert_eq!(first, second);
        assert_eq!(first, "<p>just some text<br>across two lines</p>");
    }

    #[test]
    fn test_escape_round_trip() {
        assert_eq!(
            render_html("<b>hi</b>"),
            "<p>&lt;b&gt;hi&lt;/b&gt;</p>"
        );
    }

    #[test]
    fn test_script_never_survives() {
        let html = render_html("<script>alert(1)</script>");
        assert!(!html.contains("<script"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_code_fence_isolation() {
        let html = render_html("```js\n**x**\n```");
        assert_eq!(
            html,
            r#"<pre><code class="language-js">**x**</code></pre>"#
        );
    }

    #[test]
    fn test_emphasis_precedence() {
        assert_eq!(
            render_html("**bold** and *italic*"),
            "<p><strong>bold</strong> and <em>italic</em></p>"
        );
    }

    #[test]
    fn test_list_grouping_single_container() {
        let html = render_html("- a\n- b\n- c");
        assert_eq!(html, "<ul><li>a</li><li>b</li><li>c</li></ul>");
    }

    #[test]
    fn test_ordered_list_distinct_container() {
        let html = render_html("1. a\n2. b");
        assert_eq!(html, r#"<ul class="ordered"><li>a</li><li>b</li></ul>"#);
    }

    #[test]
    fn test_link_safety() {
        let html = render_html("[x](javascript:alert(1))");
        assert!(!html.contains("<a"));
        assert!(!html.contains("javascript:alert(1)\""));
    }

    #[test]
    fn test_unterminated_fence_is_plain_text() {
        let html = render_html("```js\nhello");
        assert_eq!(html, "<p>```js<br>hello</p>");
    }

    #[test]
    fn test_headings_blockquote_mixed_document() {
        let html = render_html("# Title\n\n> quoted\n\nbody `code` here");
        assert_eq!(
            html,
            "<h1>Title</h1>\n<blockquote>quoted</blockquote>\n<p>body <code>code</code> here</p>"
        );
    }

    #[test]
    fn test_warnings_surface_rejected_links() {
        let result = Renderer::new().render("[x](javascript:alert(1))").unwrap();
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("javascript"));
    }

    #[test]
    fn test_input_too_long() {
        let renderer = Renderer::new().with_max_input_len(8);
        let err = renderer.render("123456789").unwrap_err();
        assert_eq!(err, RenderError::InputTooLong { len: 9, max: 8 });
    }

    #[test]
    fn test_default_limit_accepts_typical_messages() {
        let raw = "word ".repeat(1000);
        assert!(Renderer::new().render(&raw).is_ok());
    }

    #[test]
    fn test_render_plain_keeps_markup_literal() {
        let renderer = Renderer::new();
        let html = renderer.render_plain("**not bold**\n\n`not code`").unwrap();
        assert_eq!(html, "<p>**not bold**</p>\n<p>`not code`</p>");
    }

    #[test]
    fn test_render_plain_escapes() {
        let renderer = Renderer::new();
        let html = renderer.render_plain("<b>hi</b>").unwrap();
        assert_eq!(html, "<p>&lt;b&gt;hi&lt;/b&gt;</p>");
    }

    #[test]
    fn test_empty_input_renders_empty() {
        assert_eq!(render_html(""), "");
    }
}
