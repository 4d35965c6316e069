/// Blockquote block type with owned delimiter constant.
///
/// A quote is a single line; consecutive `> ` lines are separate blocks and
/// quotes do not nest.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, including its required space.
    pub const PREFIX: &'static str = "> ";

    /// Strips the quote prefix, returning the quoted text.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
