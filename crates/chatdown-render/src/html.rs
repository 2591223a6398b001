//! HTML emission for block nodes.
//!
//! Produces the allow-listed tag vocabulary only. Every text leaf passes
//! through the inline transforms (which escape); code-block bodies are
//! escaped directly, with no inline processing.

use std::fmt::Write;

use crate::block::{Block, ListKind};
use crate::escape::escape_html;
use crate::inline::render_inline;

/// Render parsed blocks as an HTML fragment, blocks separated by newlines.
pub(crate) fn emit(blocks: &[Block], warnings: &mut Vec<String>) -> String {
    let mut out = String::with_capacity(256);
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        emit_block(block, warnings, &mut out);
    }
    out
}

fn emit_block(block: &Block, warnings: &mut Vec<String>, out: &mut String) {
    match block {
        Block::Paragraph(lines) => {
            out.push_str("<p>");
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    out.push_str("<br>");
                }
                render_inline(line, warnings, out);
            }
            out.push_str("</p>");
        }
        Block::Heading { level, text } => {
            write!(out, "<h{level}>").unwrap();
            render_inline(text, warnings, out);
            write!(out, "</h{level}>").unwrap();
        }
        Block::Quote(text) => {
            out.push_str("<blockquote>");
            render_inline(text, warnings, out);
            out.push_str("</blockquote>");
        }
        Block::Code { lang, body } => {
            if lang.is_empty() {
                write!(out, "<pre><code>{}</code></pre>", escape_html(body)).unwrap();
            } else {
                write!(
                    out,
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    escape_html(lang),
                    escape_html(body)
                )
                .unwrap();
            }
        }
        Block::List { kind, items } => {
            // The tag vocabulary has no ol; ordered containers are marked
            // with a class and styled by the display layer.
            out.push_str(match kind {
                ListKind::Unordered => "<ul>",
                ListKind::Ordered => r#"<ul class="ordered">"#,
            });
            for item in items {
                out.push_str("<li>");
                render_inline(item, warnings, out);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
    }
}
