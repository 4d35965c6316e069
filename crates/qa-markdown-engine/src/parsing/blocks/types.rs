use serde::{Deserialize, Serialize};

use crate::parsing::inline::{Inline, InlineSequence};

/// Heading depth. The dialect stops at level 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Maps a count of `#` characters to a level.
    #[must_use]
    pub fn from_marker_len(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }
}

/// A top-level block of the document.
///
/// Textual blocks own their inline spans outright; list items each own a
/// separate sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// `# `, `## ` or `### ` line.
    Heading {
        level: HeadingLevel,
        content: InlineSequence,
    },
    /// A run of consecutive `- ` lines, one item per line.
    List { items: Vec<InlineSequence> },
    /// A single `> ` line.
    Blockquote { content: InlineSequence },
    /// Raw lines between fences, joined with `\n`. Never inline parsed.
    CodeBlock { literal_text: String },
    /// Any other non-blank line.
    Paragraph { content: InlineSequence },
    /// A blank line, kept as vertical spacing.
    Blank,
}

impl Block {
    /// Iterates every inline span of the block in order.
    ///
    /// Empty for code blocks and blank lines.
    pub fn inlines(&self) -> impl Iterator<Item = &Inline> {
        let seqs: &[InlineSequence] = match self {
            Block::Heading { content, .. }
            | Block::Blockquote { content }
            | Block::Paragraph { content } => std::slice::from_ref(content),
            Block::List { items } => items,
            Block::CodeBlock { .. } | Block::Blank => &[],
        };
        seqs.iter().flatten()
    }

    /// Short kind label, used for logging.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::List { .. } => "List",
            Block::Blockquote { .. } => "Blockquote",
            Block::CodeBlock { .. } => "CodeBlock",
            Block::Paragraph { .. } => "Paragraph",
            Block::Blank => "Blank",
        }
    }
}
