use crate::parsing::lines::LineRef;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, ListItem, Paragraph},
    types::HeadingLevel,
};

/// What a single line looks like on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: HeadingLevel, content: &'a str },
    ListItem { content: &'a str },
    Quote { content: &'a str },
    Fence,
    Text { content: &'a str },
    Blank,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether a line is inside a
/// code fence is decided later by the builder.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// The source line.
    pub line: LineRef<'a>,
    /// The opener this line matches, if any.
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Openers are tried in fixed order, first match wins: headings by
    /// level, list item, quote, fence, then paragraph text. Markers only
    /// match at column 0; indentation is never stripped.
    pub fn classify<'a>(&self, lr: LineRef<'a>) -> LineClass<'a> {
        let text = lr.text;
        let kind = if let Some((level, content)) = Heading::strip_marker(text) {
            LineKind::Heading { level, content }
        } else if let Some(content) = ListItem::strip_marker(text) {
            LineKind::ListItem { content }
        } else if let Some(content) = BlockQuote::strip_prefix(text) {
            LineKind::Quote { content }
        } else if CodeFence::opens(text) {
            LineKind::Fence
        } else if !Paragraph::is_blank(text) {
            LineKind::Text { content: text }
        } else {
            LineKind::Blank
        };

        LineClass { line: lr, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kind(text: &str) -> LineKind<'_> {
        MarkdownLineClassifier
            .classify(LineRef { index: 0, text })
            .kind
    }

    #[rstest]
    #[case("# Title", LineKind::Heading { level: HeadingLevel::H1, content: "Title" })]
    #[case("## Sub", LineKind::Heading { level: HeadingLevel::H2, content: "Sub" })]
    #[case("### Deep", LineKind::Heading { level: HeadingLevel::H3, content: "Deep" })]
    #[case("- item", LineKind::ListItem { content: "item" })]
    #[case("> quoted", LineKind::Quote { content: "quoted" })]
    #[case("```", LineKind::Fence)]
    #[case("```js", LineKind::Fence)]
    #[case("plain", LineKind::Text { content: "plain" })]
    #[case("#Title", LineKind::Text { content: "#Title" })]
    #[case("#### four", LineKind::Text { content: "#### four" })]
    #[case("  - indented", LineKind::Text { content: "  - indented" })]
    #[case("", LineKind::Blank)]
    #[case("   ", LineKind::Blank)]
    fn classify_line(#[case] input: &str, #[case] expected: LineKind<'_>) {
        assert_eq!(kind(input), expected);
    }

    #[test]
    fn heading_marker_wins_over_text() {
        assert_eq!(
            kind("# - not a list"),
            LineKind::Heading {
                level: HeadingLevel::H1,
                content: "- not a list"
            }
        );
    }

    #[test]
    fn empty_item_is_still_an_item() {
        assert_eq!(kind("- "), LineKind::ListItem { content: "" });
    }
}
