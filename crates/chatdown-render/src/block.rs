//! Block structure of a message.
//!
//! Fenced code blocks are extracted first; the remaining text is split into
//! lines, each line is classified, and adjacent list-item lines of the same
//! kind are merged into one container node. What is left over becomes
//! paragraphs split on blank lines.

use std::sync::LazyLock;

use regex::Regex;

/// Ordered vs unordered list container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    Unordered,
    Ordered,
}

/// A block-level node. Text fields are raw (unescaped) leaves; the inline
/// passes and escaping run at emission time.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Block {
    /// Plain run of lines; single newlines become explicit line breaks.
    Paragraph(Vec<String>),
    /// `#`, `##` or `###` heading.
    Heading { level: u8, text: String },
    /// One `>` line. Quoting is one level deep only.
    Quote(String),
    /// Fenced code block; body is verbatim and exempt from inline passes.
    Code { lang: String, body: String },
    /// Contiguous run of same-kind list items.
    List { kind: ListKind, items: Vec<String> },
}

/// Non-greedy so a fence terminates at the nearest closing marker, and an
/// unterminated fence matches nothing at all and degrades to plain text.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w*)\n?(.*?)```").unwrap());

static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\. (.+)$").unwrap());

/// Parse raw message text into block nodes.
pub(crate) fn parse_blocks(raw: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut last = 0;
    for caps in FENCE_RE.captures_iter(raw) {
        let m = caps.get(0).unwrap();
        parse_text(&raw[last..m.start()], &mut blocks);
        blocks.push(Block::Code {
            lang: caps[1].to_owned(),
            body: caps[2].trim().to_owned(),
        });
        last = m.end();
    }
    parse_text(&raw[last..], &mut blocks);
    blocks
}

/// Classification of a single line outside any fence.
#[derive(Debug)]
enum Line<'a> {
    Blank,
    Heading { level: u8, text: &'a str },
    Quote(&'a str),
    Item { kind: ListKind, text: &'a str },
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }
    // Longest heading marker first, so `### x` is never read as a level-1
    // heading with literal leading hashes.
    for (marker, level) in [("### ", 3_u8), ("## ", 2), ("# ", 1)] {
        if let Some(text) = line.strip_prefix(marker) {
            if !text.is_empty() {
                return Line::Heading { level, text };
            }
        }
    }
    if let Some(text) = line.strip_prefix("> ") {
        if !text.is_empty() {
            return Line::Quote(text);
        }
    }
    if let Some(text) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
    {
        if !text.is_empty() {
            return Line::Item {
                kind: ListKind::Unordered,
                text,
            };
        }
    }
    if let Some(caps) = ORDERED_ITEM_RE.captures(line) {
        if let Some(text) = caps.get(1) {
            return Line::Item {
                kind: ListKind::Ordered,
                text: text.as_str(),
            };
        }
    }
    Line::Text(line)
}

/// Classify and group the lines of a fence-free run of text.
fn parse_text(text: &str, blocks: &mut Vec<Block>) {
    let lines: Vec<Line<'_>> = text.split('\n').map(classify).collect();
    let mut paragraph: Vec<String> = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        match lines[i] {
            Line::Blank => {
                flush_paragraph(&mut paragraph, blocks);
                i += 1;
            }
            Line::Heading { level, text } => {
                flush_paragraph(&mut paragraph, blocks);
                blocks.push(Block::Heading {
                    level,
                    text: text.to_owned(),
                });
                i += 1;
            }
            Line::Quote(text) => {
                flush_paragraph(&mut paragraph, blocks);
                blocks.push(Block::Quote(text.to_owned()));
                i += 1;
            }
            Line::Item { kind, .. } => {
                flush_paragraph(&mut paragraph, blocks);
                let mut items = Vec::new();
                while let Some(Line::Item { kind: k, text }) = lines.get(i) {
                    if *k != kind {
                        break;
                    }
                    items.push((*text).to_owned());
                    i += 1;
                }
                blocks.push(Block::List { kind, items });
            }
            Line::Text(line) => {
                paragraph.push(line.trim().to_owned());
                i += 1;
            }
        }
    }
    flush_paragraph(&mut paragraph, blocks);
}

fn flush_paragraph(paragraph: &mut Vec<String>, blocks: &mut Vec<Block>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(std::mem::take(paragraph)));
    }
}
