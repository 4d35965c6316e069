/// A cursor for character-by-character inline parsing.
///
/// `i` is a byte index into `s` that always sits on a char boundary:
/// `bump` advances by a whole code point and delimiter helpers only ever
/// skip ASCII markers, so a multi-byte character is never split.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// Returns the character immediately before the cursor.
    pub fn prev(&self) -> Option<char> {
        self.s.get(..self.i)?.chars().next_back()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Returns `s[start..i]` without moving.
    pub fn since(&self, start: usize) -> &'a str {
        &self.s[start..self.i]
    }

    /// Consumes everything up to end of input and returns `s[start..]`.
    pub fn take_from(&mut self, start: usize) -> &'a str {
        self.i = self.s.len();
        &self.s[start..]
    }

    /// Scans a `open ... close` construct starting at the cursor.
    ///
    /// On success the cursor moves past `close` and the text between the
    /// delimiters is returned. Returns `None` without moving if the cursor
    /// is not at `open` or no `close` follows it.
    pub fn scan_delimited(&mut self, open: &str, close: &str) -> Option<&'a str> {
        if !self.starts_with(open) {
            return None;
        }
        let inner_start = self.i + open.len();
        let inner_len = self.s[inner_start..].find(close)?;
        let inner_end = inner_start + inner_len;
        self.i = inner_end + close.len();
        Some(&self.s[inner_start..inner_end])
    }
}
