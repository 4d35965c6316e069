/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default for any non-blank
/// line no other opener matches. Each paragraph is exactly one line.
pub struct Paragraph;

impl Paragraph {
    /// A line of only whitespace separates blocks instead of forming a
    /// paragraph.
    pub fn is_blank(line: &str) -> bool {
        line.trim().is_empty()
    }
}
