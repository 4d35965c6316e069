/// A reference to a single source line, without its line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Zero-based line number in the document.
    pub index: usize,
    /// The line text with `\n` / `\r\n` stripped.
    pub text: &'a str,
}

/// Returns an iterator over the document's lines.
///
/// Follows `str::lines`: a final line terminator does not produce an extra
/// empty line, so `"a\n"` yields one line and `"a\n\n"` yields two.
pub fn lines(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.lines()
        .enumerate()
        .map(|(index, text)| LineRef { index, text })
}
