//! Terminal rendering of a parsed document for the Preview tab.

use qa_markdown_engine::{Block, Document, Inline, InlineSequence};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Converts a document into styled terminal lines.
///
/// Blank input shows `placeholder` in italics instead.
pub fn document_lines(doc: &Document, placeholder: &str) -> Vec<Line<'static>> {
    if doc.blocks.iter().all(|b| matches!(b, Block::Blank)) {
        return vec![Line::from(Span::styled(
            placeholder.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))];
    }

    let mut lines = Vec::new();
    for block in &doc.blocks {
        match block {
            Block::Heading { level, content } => {
                let style = Style::default().add_modifier(Modifier::BOLD);
                let mut spans = vec![Span::styled(
                    format!("{} ", "#".repeat(level.as_u8() as usize)),
                    style.fg(Color::Cyan),
                )];
                spans.extend(inline_spans(content, style));
                lines.push(Line::from(spans));
            }
            Block::List { items } => {
                for item in items {
                    let mut spans = vec![Span::raw("• ")];
                    spans.extend(inline_spans(item, Style::default()));
                    lines.push(Line::from(spans));
                }
            }
            Block::Blockquote { content } => {
                let style = Style::default().add_modifier(Modifier::ITALIC);
                let mut spans = vec![Span::styled("│ ", Style::default().fg(Color::Blue))];
                spans.extend(inline_spans(content, style));
                lines.push(Line::from(spans));
            }
            Block::CodeBlock { literal_text } => {
                let style = Style::default().add_modifier(Modifier::DIM);
                for code_line in literal_text.split('\n') {
                    lines.push(Line::from(Span::styled(format!("    {code_line}"), style)));
                }
            }
            Block::Paragraph { content } => {
                lines.push(Line::from(inline_spans(content, Style::default())));
            }
            Block::Blank => lines.push(Line::default()),
        }
    }
    lines
}

fn inline_spans(seq: &InlineSequence, base: Style) -> Vec<Span<'static>> {
    seq.iter()
        .map(|span| match span {
            Inline::Text(s) => Span::styled(s.clone(), base),
            Inline::Bold(s) => Span::styled(s.clone(), base.add_modifier(Modifier::BOLD)),
            Inline::Italic(s) => Span::styled(s.clone(), base.add_modifier(Modifier::ITALIC)),
            Inline::Code(s) => Span::styled(s.clone(), base.fg(Color::Yellow)),
            Inline::Link { text, url } => Span::styled(
                format!("{text} <{url}>"),
                base.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        })
        .collect()
}
