/// Backtick code fence.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// A line opens a fence if it starts with three backticks. Whatever
    /// follows on that line (a language tag, say) is discarded.
    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    /// Only a line that is exactly three backticks closes a fence.
    pub fn closes(line: &str) -> bool {
        line == Self::BACKTICKS
    }
}
