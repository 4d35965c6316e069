use serde::{Deserialize, Serialize};

/// A parsed inline span.
///
/// Every variant owns its delimiter-stripped text. Spans never overlap and
/// appear in left-to-right order within their [`InlineSequence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// Plain text that isn't part of any delimited construct.
    Text(String),
    /// Content between a `**` pair.
    Bold(String),
    /// Content between a pair of single `*`.
    Italic(String),
    /// Content between a pair of backticks. Nothing inside is parsed.
    Code(String),
    /// A `[text](url)` link.
    Link {
        /// The bracketed text.
        text: String,
        /// The parenthesised target, verbatim.
        url: String,
    },
}

/// Ordered inline spans of one block (or one list item).
pub type InlineSequence = Vec<Inline>;

impl Inline {
    /// Returns the human-readable text of the span with delimiters removed.
    ///
    /// For links this is the link text; the URL is markup, not content.
    #[must_use]
    pub fn literal(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Bold(s) | Inline::Italic(s) | Inline::Code(s) => s,
            Inline::Link { text, .. } => text,
        }
    }

    /// Returns true for [`Inline::Text`].
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Inline::Text(_))
    }
}
