//! The line classifier and span tokenizer.

use crate::span::{Span, SpanKind};

const HEADING_PREFIX: &str = "# ";
const RAW_OPEN: &str = "$START";
const RAW_CLOSE: &str = "$END";
const LINK_OPEN: &str = "[[";
const LINK_CLOSE: &str = "]]";

/// One line-level unit of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// An ordinary line.
    Paragraph(Vec<Span>),
    /// A line that began with `# `; the spans cover the remainder.
    Heading(Vec<Span>),
}

/// Parses markup text into blocks.
///
/// Lines are classified independently, but the raw-mode bit threads from
/// the end of each line's tokenization into the start of the next, so an
/// unclosed `$START` keeps later lines raw from their first character.
#[must_use]
pub fn parse(input: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut raw = false;

    for line in input.split('\n') {
        if line.is_empty() {
            continue;
        }
        if let Some(text) = line.strip_prefix(HEADING_PREFIX) {
            let (spans, next_raw) = tokenize_line(text, raw);
            raw = next_raw;
            blocks.push(Block::Heading(spans));
        } else {
            let (spans, next_raw) = tokenize_line(line, raw);
            raw = next_raw;
            blocks.push(Block::Paragraph(spans));
        }
    }

    blocks
}

/// Tokenizes one line into spans, seeded with (and returning) the raw bit.
///
/// The scanner keeps a single mutable current kind: `*` and `_` toggle it
/// between plain and bold/italic respectively, each toggle flushing the
/// accumulated span (empty spans included — the flush is unconditional, at
/// delimiters and at end of line alike).
fn tokenize_line(line: &str, start_raw: bool) -> (Vec<Span>, bool) {
    let mut spans = Vec::new();
    let mut kind = if start_raw {
        SpanKind::Raw
    } else {
        SpanKind::Plain
    };
    let mut current = String::new();
    let mut rest = line;

    while !rest.is_empty() {
        if kind == SpanKind::Raw {
            if let Some(tail) = rest.strip_prefix(RAW_CLOSE) {
                spans.push(kind.with_text(std::mem::take(&mut current)));
                kind = SpanKind::Plain;
                rest = tail;
            } else {
                rest = copy_char(rest, &mut current);
            }
            continue;
        }

        if let Some(tail) = rest.strip_prefix(RAW_OPEN) {
            spans.push(kind.with_text(std::mem::take(&mut current)));
            kind = SpanKind::Raw;
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(LINK_OPEN) {
            match tail.find(LINK_CLOSE) {
                Some(end) => {
                    spans.push(kind.with_text(std::mem::take(&mut current)));
                    spans.push(Span::Link {
                        target: tail[..end].to_string(),
                    });
                    // The kind active before the link resumes after it.
                    rest = &tail[end + LINK_CLOSE.len()..];
                }
                // No closing marker on this line: the brackets are literal.
                None => rest = copy_char(rest, &mut current),
            }
        } else if let Some(tail) = rest.strip_prefix('*') {
            spans.push(kind.with_text(std::mem::take(&mut current)));
            kind = toggle(kind, SpanKind::Bold);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('_') {
            spans.push(kind.with_text(std::mem::take(&mut current)));
            kind = toggle(kind, SpanKind::Italic);
            rest = tail;
        } else {
            rest = copy_char(rest, &mut current);
        }
    }

    spans.push(kind.with_text(current));
    (spans, kind == SpanKind::Raw)
}

/// Toggle semantics: leaving `target` returns to plain; anything else
/// (plain or the other emphasis kind) switches to `target`. Bold and
/// italic therefore replace each other instead of nesting.
fn toggle(kind: SpanKind, target: SpanKind) -> SpanKind {
    if kind == target {
        SpanKind::Plain
    } else {
        target
    }
}

/// Appends the first character of `rest` to `current` and returns the
/// remainder. Callers only invoke this on a non-empty `rest`.
fn copy_char<'a>(rest: &'a str, current: &mut String) -> &'a str {
    match rest.chars().next() {
        Some(ch) => {
            current.push(ch);
            &rest[ch.len_utf8()..]
        }
        None => rest,
    }
}
