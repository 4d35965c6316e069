use super::{
    blocks::Block,
    document::Document,
    inline::{Inline, InlineSequence},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - No inline sequence contains an empty `Text` span
/// - No inline sequence contains two adjacent `Text` spans
/// - Every list has at least one item
/// - No two lists are adjacent (a list run is never split without a separator)
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    let mut prev_was_list = false;
    for (i, block) in doc.blocks.iter().enumerate() {
        match block {
            Block::Heading { content, .. }
            | Block::Blockquote { content }
            | Block::Paragraph { content } => check_sequence(i, content),
            Block::List { items } => {
                assert!(!items.is_empty(), "block {i}: list without items");
                assert!(!prev_was_list, "block {i}: list directly after a list");
                for item in items {
                    check_sequence(i, item);
                }
            }
            Block::CodeBlock { .. } | Block::Blank => {}
        }
        prev_was_list = matches!(block, Block::List { .. });
    }
}

fn check_sequence(block: usize, seq: &InlineSequence) {
    for (j, span) in seq.iter().enumerate() {
        if let Inline::Text(s) = span {
            assert!(!s.is_empty(), "block {block}: empty Text span at {j}");
        }
    }
    for pair in seq.windows(2) {
        assert!(
            !(pair[0].is_text() && pair[1].is_text()),
            "block {block}: adjacent Text spans {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}
