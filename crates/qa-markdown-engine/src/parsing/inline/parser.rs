use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, Strong},
    types::{Inline, InlineSequence},
};

/// Result of one delimiter step.
#[derive(Debug, PartialEq, Eq)]
enum Step<'a> {
    /// A complete span was recognised.
    Span(Inline),
    /// Source text to keep as plain text, delimiters included.
    Literal(&'a str),
}

/// Parses one unit of text (a heading, quote, paragraph or list item) into
/// inline spans.
///
/// # Precedence
/// At each position: `**`, then a `*` not preceded by `*`, then `` ` ``,
/// then `[`. Anything else accumulates as plain text.
///
/// # Degrade to literal
/// An opener without its closer turns into plain text together with the
/// rest of the unit. `[text]` without a following `(url)` stays literal,
/// brackets included, and scanning resumes after the `]`.
///
/// # Returns
/// Spans in source order. Plain text is flushed once per run, so no two
/// `Text` spans are adjacent and none is empty.
pub fn parse_inline(s: &str) -> InlineSequence {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text = String::new();

    fn flush_text(out: &mut InlineSequence, text: &mut String) {
        if !text.is_empty() {
            out.push(Inline::Text(std::mem::take(text)));
        }
    }

    while !cur.eof() {
        let step = try_parse_strong(&mut cur)
            .or_else(|| try_parse_emphasis(&mut cur))
            .or_else(|| try_parse_code_span(&mut cur))
            .or_else(|| try_parse_link(&mut cur));

        match step {
            Some(Step::Span(node)) => {
                flush_text(&mut out, &mut text);
                out.push(node);
            }
            Some(Step::Literal(run)) => text.push_str(run),
            None => {
                if let Some(c) = cur.bump() {
                    text.push(c);
                }
            }
        }
    }

    flush_text(&mut out, &mut text);
    out
}

/// Shared open/close handling for the symmetric delimiters.
///
/// Returns `None` if the cursor is not at `delim`. An unclosed opener
/// consumes the rest of the input as literal text.
fn delimited<'a>(
    cur: &mut Cursor<'a>,
    delim: &str,
    make: fn(String) -> Inline,
) -> Option<Step<'a>> {
    if !cur.starts_with(delim) {
        return None;
    }
    let start = cur.pos();
    match cur.scan_delimited(delim, delim) {
        Some(inner) => Some(Step::Span(make(inner.to_string()))),
        None => {
            log::trace!("unclosed {delim:?} at byte {start}, keeping literal");
            Some(Step::Literal(cur.take_from(start)))
        }
    }
}

fn try_parse_strong<'a>(cur: &mut Cursor<'a>) -> Option<Step<'a>> {
    delimited(cur, Strong::DELIM, Inline::Bold)
}

fn try_parse_emphasis<'a>(cur: &mut Cursor<'a>) -> Option<Step<'a>> {
    if cur.prev() == Some(Emphasis::STAR) {
        return None;
    }
    delimited(cur, Emphasis::DELIM, Inline::Italic)
}

fn try_parse_code_span<'a>(cur: &mut Cursor<'a>) -> Option<Step<'a>> {
    delimited(cur, CodeSpan::TICK, Inline::Code)
}

fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<Step<'a>> {
    if !cur.starts_with(Link::TEXT_OPEN) {
        return None;
    }
    let start = cur.pos();
    let Some(text) = cur.scan_delimited(Link::TEXT_OPEN, Link::TEXT_CLOSE) else {
        log::trace!("unclosed link text at byte {start}, keeping literal");
        return Some(Step::Literal(cur.take_from(start)));
    };
    if !cur.starts_with(Link::URL_OPEN) {
        // Bare `[text]`: keep the bracketed run and carry on after it.
        return Some(Step::Literal(cur.since(start)));
    }
    let Some(url) = cur.scan_delimited(Link::URL_OPEN, Link::URL_CLOSE) else {
        log::trace!("unclosed link url at byte {start}, keeping literal");
        return Some(Step::Literal(cur.take_from(start)));
    };
    Some(Step::Span(Inline::Link {
        text: text.to_string(),
        url: url.to_string(),
    }))
}
