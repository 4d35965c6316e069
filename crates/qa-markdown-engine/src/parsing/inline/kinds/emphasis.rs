/// Bold (`**text**`) delimiters.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
}

/// Italic (`*text*`) delimiters.
///
/// An asterisk directly after another asterisk never opens italic, so the
/// tail of `**bold**` is not reread as emphasis.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static str = "*";
    pub const STAR: char = '*';
}
