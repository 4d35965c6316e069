/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: asterisks and brackets inside them are kept
/// verbatim.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
