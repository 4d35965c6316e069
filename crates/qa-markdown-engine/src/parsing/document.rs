use serde::{Deserialize, Serialize};

use super::{blocks::Block, inline::InlineSequence};

/// The result of one render call: blocks in source order.
///
/// Built once by [`parse_document`](super::parse_document) and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Human-readable text of the whole document with all markup removed.
    ///
    /// Blocks are separated by `\n`, as are list items. Code blocks give
    /// their literal text and blank lines an empty line, so for input
    /// without inline markup this is the input with block markers removed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(block_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn block_text(block: &Block) -> String {
    match block {
        Block::Heading { content, .. }
        | Block::Blockquote { content }
        | Block::Paragraph { content } => sequence_text(content),
        Block::List { items } => items
            .iter()
            .map(sequence_text)
            .collect::<Vec<_>>()
            .join("\n"),
        Block::CodeBlock { literal_text } => literal_text.clone(),
        Block::Blank => String::new(),
    }
}

fn sequence_text(seq: &InlineSequence) -> String {
    seq.iter().map(|span| span.literal()).collect()
}
