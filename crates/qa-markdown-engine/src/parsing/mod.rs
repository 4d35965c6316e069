pub mod blocks;
pub mod document;
pub mod inline;
pub mod invariants;
pub mod lines;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, MarkdownLineClassifier};

pub use document::Document;

/// Parses a whole document into blocks.
///
/// Total over all strings: unknown syntax becomes a paragraph and unclosed
/// inline delimiters become text, so this never fails. Empty input gives an
/// empty document.
pub fn parse_document(text: &str) -> Document {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();
    let mut line_count = 0usize;

    for lr in lines::lines(text) {
        let lc = classifier.classify(lr);
        builder.push(&lc);
        line_count += 1;
    }

    let blocks = builder.finish();
    log::debug!("parsed {line_count} lines into {} blocks", blocks.len());
    Document { blocks }
}
