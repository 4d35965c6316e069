use crate::parsing::inline::{InlineSequence, parse_inline};

use super::{
    classify::{LineClass, LineKind},
    kinds::CodeFence,
    types::Block,
};

/// A block that spans several lines and is still accepting them.
#[derive(Debug)]
enum LeafState<'a> {
    None,
    List {
        items: Vec<InlineSequence>,
    },
    Fence {
        opened_at: usize,
        lines: Vec<&'a str>,
    },
}

/// Phase 2 of block parsing: turns classified lines into blocks.
///
/// Single-line blocks are emitted as soon as their line is pushed. Lists and
/// code fences stay open in `leaf` until a line ends them or input runs out.
pub struct BlockBuilder<'a> {
    leaf: LeafState<'a>,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'a>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        // Anything that isn't an item ends the list, blank lines included.
        if !matches!(c.kind, LineKind::ListItem { .. }) {
            self.flush_list();
        }

        let block = match c.kind {
            LineKind::ListItem { content } => {
                self.extend_list(content);
                return;
            }
            LineKind::Heading { level, content } => Block::Heading {
                level,
                content: parse_inline(content),
            },
            LineKind::Quote { content } => Block::Blockquote {
                content: parse_inline(content),
            },
            LineKind::Text { content } => Block::Paragraph {
                content: parse_inline(content),
            },
            LineKind::Blank => Block::Blank,
            LineKind::Fence => {
                self.leaf = LeafState::Fence {
                    opened_at: c.line.index,
                    lines: vec![],
                };
                return;
            }
        };
        self.emit(c.line.index, block);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        if let LeafState::Fence { opened_at, .. } = self.leaf {
            log::trace!("code fence opened at line {opened_at} runs to end of input");
        }
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn emit(&mut self, line: usize, block: Block) {
        log::trace!("line {line}: {}", block.kind_name());
        self.out.push(block);
    }

    fn consume_fence_line(&mut self, c: &LineClass<'a>) {
        if CodeFence::closes(c.line.text) {
            self.flush_fence();
        } else if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(c.line.text);
        }
    }

    fn extend_list(&mut self, content: &str) {
        let item = parse_inline(content);
        match &mut self.leaf {
            LeafState::List { items } => items.push(item),
            _ => self.leaf = LeafState::List { items: vec![item] },
        }
    }

    fn flush_list(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::List { items } = prev {
            log::trace!("list with {} items", items.len());
            self.out.push(Block::List { items });
        } else {
            self.leaf = prev; // put back non-list leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence { opened_at, lines } = prev {
            self.emit(
                opened_at,
                Block::CodeBlock {
                    literal_text: lines.join("\n"),
                },
            );
        } else {
            self.leaf = prev;
        }
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{
        blocks::{MarkdownLineClassifier, types::HeadingLevel},
        inline::Inline,
        lines::lines,
    };
    use pretty_assertions::assert_eq;

    fn build(src: &str) -> Vec<Block> {
        let classifier = MarkdownLineClassifier;
        let mut builder = BlockBuilder::new();
        for lr in lines(src) {
            builder.push(&classifier.classify(lr));
        }
        builder.finish()
    }

    fn text(s: &str) -> InlineSequence {
        vec![Inline::Text(s.into())]
    }

    #[test]
    fn list_run_collects_items() {
        assert_eq!(
            build("- a\n- b\n- c"),
            vec![Block::List {
                items: vec![text("a"), text("b"), text("c")]
            }]
        );
    }

    #[test]
    fn blank_line_splits_list() {
        assert_eq!(
            build("- a\n\n- b"),
            vec![
                Block::List {
                    items: vec![text("a")]
                },
                Block::Blank,
                Block::List {
                    items: vec![text("b")]
                },
            ]
        );
    }

    #[test]
    fn paragraph_splits_list() {
        assert_eq!(
            build("- a\nmid\n- b"),
            vec![
                Block::List {
                    items: vec![text("a")]
                },
                Block::Paragraph {
                    content: text("mid")
                },
                Block::List {
                    items: vec![text("b")]
                },
            ]
        );
    }

    #[test]
    fn fence_content_is_verbatim() {
        assert_eq!(
            build("```rust\n# not a heading\n- **raw**\n```"),
            vec![Block::CodeBlock {
                literal_text: "# not a heading\n- **raw**".into()
            }]
        );
    }

    #[test]
    fn unclosed_fence_runs_to_end() {
        assert_eq!(
            build("```\na\n\nb"),
            vec![Block::CodeBlock {
                literal_text: "a\n\nb".into()
            }]
        );
    }

    #[test]
    fn fence_with_tag_does_not_close() {
        assert_eq!(
            build("```\na\n```js\nb\n```\nafter"),
            vec![
                Block::CodeBlock {
                    literal_text: "a\n```js\nb".into()
                },
                Block::Paragraph {
                    content: text("after")
                },
            ]
        );
    }

    #[test]
    fn empty_fence() {
        assert_eq!(
            build("```\n```"),
            vec![Block::CodeBlock {
                literal_text: String::new()
            }]
        );
    }

    #[test]
    fn fence_ends_open_list() {
        assert_eq!(
            build("- a\n```\nx\n```"),
            vec![
                Block::List {
                    items: vec![text("a")]
                },
                Block::CodeBlock {
                    literal_text: "x".into()
                },
            ]
        );
    }

    #[test]
    fn consecutive_blank_lines_are_not_collapsed() {
        assert_eq!(
            build("a\n\n\nb"),
            vec![
                Block::Paragraph { content: text("a") },
                Block::Blank,
                Block::Blank,
                Block::Paragraph { content: text("b") },
            ]
        );
    }

    #[test]
    fn quotes_are_one_line_each() {
        assert_eq!(
            build("> a\n> b"),
            vec![
                Block::Blockquote { content: text("a") },
                Block::Blockquote { content: text("b") },
            ]
        );
    }

    #[test]
    fn headings_by_level() {
        assert_eq!(
            build("## Two"),
            vec![Block::Heading {
                level: HeadingLevel::H2,
                content: text("Two")
            }]
        );
    }
}
