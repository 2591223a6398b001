//! Inline span transforms applied to text leaves.
//!
//! Runs over paragraph lines, heading text, blockquote text and list items
//! only; code-block bodies never reach this module. Within a leaf, code
//! spans are carved out first, then links, then emphasis, so a code span
//! body or a URL is never re-matched by a later pass.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::escape::{escape_attr, escape_html};
use crate::link::LinkTarget;

static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

// Triple markers are tried before double and single, so `***x***` resolves
// as strong wrapping em instead of strong around literal asterisks. Double
// before single keeps `**x**` out of the italic rule's reach.
static STRONG_EM_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*([^*]+)\*\*\*").unwrap());
static STRONG_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static EM_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static STRONG_EM_UNDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"___([^_]+)___").unwrap());
static STRONG_UNDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__([^_]+)__").unwrap());
static EM_UNDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_([^_]+)_").unwrap());

/// Render one text leaf into `out`.
///
/// Everything written is escaped; warnings record content that degraded to
/// literal text (currently rejected link targets).
pub(crate) fn render_inline(text: &str, warnings: &mut Vec<String>, out: &mut String) {
    let mut last = 0;
    for caps in CODE_SPAN_RE.captures_iter(text) {
        let m = caps.get(0).unwrap();
        render_spans(&text[last..m.start()], warnings, out);
        out.push_str("<code>");
        out.push_str(&escape_html(&caps[1]));
        out.push_str("</code>");
        last = m.end();
    }
    render_spans(&text[last..], warnings, out);
}

/// Links, then emphasis, over a slice containing no code spans.
fn render_spans(text: &str, warnings: &mut Vec<String>, out: &mut String) {
    let mut last = 0;
    for caps in LINK_RE.captures_iter(text) {
        let m = caps.get(0).unwrap();
        out.push_str(&emphasis(&text[last..m.start()]));
        let (label, url) = (&caps[1], &caps[2]);
        match LinkTarget::parse(url) {
            Ok(target) => {
                write!(
                    out,
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    escape_attr(target.as_str()),
                    emphasis(label)
                )
                .unwrap();
            }
            Err(err) => {
                tracing::debug!(url, error = %err, "rejected link target");
                warnings.push(format!("link target rejected ({err}): {url}"));
                out.push_str(&escape_html(m.as_str()));
            }
        }
        last = m.end();
    }
    out.push_str(&emphasis(&text[last..]));
}

/// Bold/italic substitution over plain text. Escapes first; the emphasis
/// markers survive escaping unchanged.
fn emphasis(text: &str) -> String {
    let mut html = escape_html(text);
    for (re, replacement) in [
        (&STRONG_EM_STAR_RE, "<strong><em>$1</em></strong>"),
        (&STRONG_STAR_RE, "<strong>$1</strong>"),
        (&STRONG_EM_UNDER_RE, "<strong><em>$1</em></strong>"),
        (&STRONG_UNDER_RE, "<strong>$1</strong>"),
        (&EM_STAR_RE, "<em>$1</em>"),
        (&EM_UNDER_RE, "<em>$1</em>"),
    ] {
        html = re.replace_all(&html, replacement).into_owned();
    }
    html
}
