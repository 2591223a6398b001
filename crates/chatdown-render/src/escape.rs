//! HTML escaping for untrusted message text.

/// Escape HTML-significant characters in text content.
///
/// Replaces `&` with `&amp;`, `<` with `&lt;` and `>` with `&gt;`. The
/// ampersand is handled first so entities introduced by the other
/// substitutions are never double-escaped. Total over all inputs; the empty
/// string maps to the empty string.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a double-quoted attribute value.
///
/// Same as [`escape_html`] plus `"` to `&quot;`, so a value can never
/// terminate the attribute it is written into.
#[must_use]
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
