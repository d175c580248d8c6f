/// Character-level source reader for the Nuevo tokenizer.
///
/// The cursor wraps a source string and hands out one character at a time
/// with a single character of lookahead. All positions are byte offsets
/// into the original UTF-8 source text.
pub struct Cursor<'src> {
    pos: u32,
    chars: std::str::Chars<'src>,
}

impl<'src> Cursor<'src> {
    /// Create a new cursor at the start of the source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            pos: 0,
            chars: source.chars(),
        }
    }

    /// Look at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// Consume the next character and advance the position.
    ///
    /// Returns the consumed character, or `None` if at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.pos += c.len_utf8() as u32;
        Some(c)
    }

    /// Current byte position in the source text.
    pub fn pos(&self) -> u32 {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cursor_starts_at_zero() {
        let cursor = Cursor::new("hola");
        assert_eq!(cursor.pos(), 0);
        assert_eq!(cursor.peek(), Some('h'));
    }

    #[test]
    fn peek_does_not_advance() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn advance_moves_position() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), Some('c'));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.pos(), 3);
    }

    #[test]
    fn advance_tracks_multibyte_utf8() {
        // U+00F1 (n with tilde) is 2 bytes in UTF-8
        let mut cursor = Cursor::new("\u{00F1}a");
        assert_eq!(cursor.advance(), Some('\u{00F1}'));
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.pos(), 3);
    }

    #[test]
    fn empty_source_is_immediately_exhausted() {
        let mut cursor = Cursor::new("");
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.pos(), 0);
    }
}
