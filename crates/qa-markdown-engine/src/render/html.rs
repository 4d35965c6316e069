use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    Document,
    blocks::Block,
    inline::{Inline, InlineSequence},
    parse_document,
};

/// Placeholder shown when a preview has nothing to render.
pub const DEFAULT_EMPTY_PLACEHOLDER: &str = "Nothing to preview";

/// Knobs for HTML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Open links in a new tab (`target="_blank" rel="noopener noreferrer"`).
    pub external_links: bool,
    /// Text shown by [`render_preview`] for blank input.
    pub empty_placeholder: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            external_links: true,
            empty_placeholder: DEFAULT_EMPTY_PLACEHOLDER.to_string(),
        }
    }
}

/// Renders a document as an HTML fragment, one block per line.
///
/// All text is escaped. URLs are escaped as attribute values but otherwise
/// passed through as written.
pub fn render_html(doc: &Document, opts: &HtmlOptions) -> String {
    doc.blocks
        .iter()
        .map(|b| render_block(b, opts))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders raw text the way the editor's preview pane does.
///
/// Blank input shows the placeholder instead of an empty fragment.
pub fn render_preview(text: &str, opts: &HtmlOptions) -> String {
    if text.trim().is_empty() {
        return format!(
            r#"<p class="empty">{}</p>"#,
            encode_text(&opts.empty_placeholder)
        );
    }
    render_html(&parse_document(text), opts)
}

fn render_block(block: &Block, opts: &HtmlOptions) -> String {
    match block {
        Block::Heading { level, content } => {
            let n = level.as_u8();
            format!("<h{n}>{}</h{n}>", render_inlines(content, opts))
        }
        Block::List { items } => {
            let mut out = String::from("<ul>");
            for item in items {
                let _ = write!(out, "<li>{}</li>", render_inlines(item, opts));
            }
            out.push_str("</ul>");
            out
        }
        Block::Blockquote { content } => {
            format!("<blockquote>{}</blockquote>", render_inlines(content, opts))
        }
        Block::CodeBlock { literal_text } => {
            format!("<pre><code>{}</code></pre>", encode_text(literal_text))
        }
        Block::Paragraph { content } => format!("<p>{}</p>", render_inlines(content, opts)),
        Block::Blank => r#"<div class="blank"></div>"#.to_string(),
    }
}

fn render_inlines(seq: &InlineSequence, opts: &HtmlOptions) -> String {
    let mut out = String::new();
    for span in seq {
        match span {
            Inline::Text(s) => out.push_str(&encode_text(s)),
            Inline::Bold(s) => {
                let _ = write!(out, "<strong>{}</strong>", encode_text(s));
            }
            Inline::Italic(s) => {
                let _ = write!(out, "<em>{}</em>", encode_text(s));
            }
            Inline::Code(s) => {
                let _ = write!(out, "<code>{}</code>", encode_text(s));
            }
            Inline::Link { text, url } => {
                let target = if opts.external_links {
                    r#" target="_blank" rel="noopener noreferrer""#
                } else {
                    ""
                };
                let _ = write!(
                    out,
                    r#"<a href="{}"{target}>{}</a>"#,
                    encode_double_quoted_attribute(url),
                    encode_text(text)
                );
            }
        }
    }
    out
}
