// Nuevo lexer -- tokenizer for the Nuevo programming language.

mod cursor;

use cursor::Cursor;
use nuevo_common::error::{LexError, LexErrorKind};
use nuevo_common::span::Span;
use nuevo_common::token::{keyword_from_str, literal_from_str, Token, TokenKind};

/// Which lexeme family the scanner is currently accumulating.
#[derive(Debug, Clone, Copy)]
enum ScanState {
    /// No multi-character literal in progress. The buffer holds at most a
    /// partial identifier or keyword.
    Default,
    /// Inside a string literal, after the opening quote.
    InString,
    /// Inside a numeric literal.
    InNumber,
}

/// Outcome of dispatching one character.
#[derive(Debug, Clone, Copy)]
enum Step {
    /// The character was absorbed; read the next one.
    Consumed,
    /// The character closed the current lexeme and must be dispatched again
    /// under the new state before any more input is read.
    Reprocess,
}

/// The Nuevo tokenizer. Converts source text into a vector of tokens.
///
/// A single pass over a [`Cursor`] with one character of lookahead, driven
/// by an explicit [`ScanState`]. Characters that belong to a multi-character
/// lexeme collect in an accumulation buffer until a delimiter flushes them
/// out as a token. One instance scans exactly one source buffer:
/// [`Tokenizer::run`] consumes the instance, so a finished scan can never be
/// resumed or reused.
pub struct Tokenizer<'src> {
    cursor: Cursor<'src>,
    state: ScanState,
    /// Accumulation buffer for the lexeme currently being built.
    buf: String,
    /// Byte offset where the pending lexeme began.
    buf_start: u32,
    tokens: Vec<Token>,
}

impl<'src> Tokenizer<'src> {
    /// Create a new tokenizer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: ScanState::Default,
            buf: String::new(),
            buf_start: 0,
            tokens: Vec::new(),
        }
    }

    /// Convenience: scan `source` to completion in one call.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
        Tokenizer::new(source).run()
    }

    /// Scan the entire source and return the finished token sequence.
    ///
    /// Tokens appear in exactly the left-to-right order their lexemes
    /// complete in the source. A scan failure returns the error alone,
    /// never a partial token list.
    pub fn run(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            let start = self.cursor.pos();
            let Some(c) = self.cursor.advance() else { break };

            // A character that closes a literal is dispatched a second time
            // under the new state, so nothing is lost at lexeme boundaries.
            while let Step::Reprocess = self.step(c, start)? {}
        }
        self.finish()
    }

    /// Dispatch one character under the current scan state.
    ///
    /// `start` is the byte offset of `c`. The one character of lookahead is
    /// read (and, for compound operators and escapes, consumed) directly
    /// from the cursor.
    fn step(&mut self, c: char, start: u32) -> Result<Step, LexError> {
        match self.state {
            ScanState::Default => self.default_step(c, start),
            ScanState::InString => self.string_step(c, start),
            ScanState::InNumber => self.number_step(c, start),
        }
    }

    // ── Default-state dispatch ───────────────────────────────────────────

    /// One character outside any string or number scan.
    fn default_step(&mut self, c: char, start: u32) -> Result<Step, LexError> {
        // Whitespace closes a pending word and is otherwise discarded; it
        // never lands in any token's text.
        if c.is_whitespace() {
            self.flush_word(start);
            return Ok(Step::Consumed);
        }

        // Identifier/keyword characters. A digit extends a pending word but
        // never starts one: with an empty buffer it begins a number instead.
        if is_word_start(c) || (!self.buf.is_empty() && is_word_continue(c)) {
            if self.buf.is_empty() {
                self.buf_start = start;
            }
            self.buf.push(c);
            return Ok(Step::Consumed);
        }

        if c.is_ascii_digit() {
            self.state = ScanState::InNumber;
            self.buf_start = start;
            self.buf.push(c);
            return Ok(Step::Consumed);
        }

        if c == '"' {
            self.flush_word(start);
            self.state = ScanState::InString;
            self.buf_start = start;
            return Ok(Step::Consumed);
        }

        if let Some(kind) = punct_kind(c) {
            self.flush_word(start);
            self.push_bare(kind, start);
            return Ok(Step::Consumed);
        }

        if let Some(entry) = op_entry(c) {
            self.flush_word(start);
            self.emit_operator(entry, c, start)?;
            return Ok(Step::Consumed);
        }

        Err(LexError::new(
            LexErrorKind::InvalidCharacter(c),
            Span::new(start, self.cursor.pos()),
        ))
    }

    /// Resolve an operator character against the lookahead table.
    ///
    /// When the compound continuation matches, the lookahead character is
    /// consumed as part of the operator. A pair-only operator without its
    /// continuation is an invalid character.
    fn emit_operator(&mut self, entry: OpEntry, c: char, start: u32) -> Result<(), LexError> {
        if let Some((cont, compound)) = entry.pair {
            if self.cursor.peek() == Some(cont) {
                self.cursor.advance(); // consume the continuation
                self.push_bare(compound, start);
                return Ok(());
            }
        }
        match entry.single {
            Some(kind) => {
                self.push_bare(kind, start);
                Ok(())
            }
            None => Err(LexError::new(
                LexErrorKind::InvalidCharacter(c),
                Span::new(start, self.cursor.pos()),
            )),
        }
    }

    // ── String scanning ──────────────────────────────────────────────────

    /// One character inside a string literal.
    ///
    /// An unescaped closing quote finishes the literal. The token text is
    /// the decoded payload without the delimiting quotes; the span covers
    /// quote to quote.
    fn string_step(&mut self, c: char, start: u32) -> Result<Step, LexError> {
        match c {
            '"' => {
                let text = std::mem::take(&mut self.buf);
                self.tokens.push(Token::new(
                    TokenKind::StringLiteral,
                    text,
                    self.buf_start,
                    self.cursor.pos(),
                ));
                self.state = ScanState::Default;
                Ok(Step::Consumed)
            }
            '\\' => {
                let Some(esc) = self.cursor.advance() else {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedString,
                        Span::new(self.buf_start, self.cursor.pos()),
                    ));
                };
                let Some(decoded) = decode_escape(esc) else {
                    return Err(LexError::new(
                        LexErrorKind::InvalidEscape(esc),
                        Span::new(start, self.cursor.pos()),
                    ));
                };
                self.buf.push(decoded);
                Ok(Step::Consumed)
            }
            _ => {
                self.buf.push(c);
                Ok(Step::Consumed)
            }
        }
    }

    // ── Number scanning ──────────────────────────────────────────────────

    /// One character inside a numeric literal.
    ///
    /// Digits and the decimal point extend the lexeme. Anything else closes
    /// it and is handed back for a second dispatch under
    /// [`ScanState::Default`].
    fn number_step(&mut self, c: char, start: u32) -> Result<Step, LexError> {
        match c {
            '0'..='9' | '.' => {
                self.buf.push(c);
                Ok(Step::Consumed)
            }
            _ => {
                self.flush_number(start)?;
                Ok(Step::Reprocess)
            }
        }
    }

    // ── Lexeme flushing ──────────────────────────────────────────────────

    /// Close the pending identifier/keyword lexeme, if any.
    ///
    /// The finished buffer is checked against the literal words first and
    /// the keyword table second; anything unmatched is an identifier. An
    /// empty buffer is a no-op, so runs of delimiters flush nothing.
    fn flush_word(&mut self, end: u32) {
        if self.buf.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.buf);
        let kind = literal_from_str(&text)
            .or_else(|| keyword_from_str(&text))
            .unwrap_or(TokenKind::Identifier);
        let token = if kind.is_literal() {
            Token::new(kind, text, self.buf_start, end)
        } else {
            Token::bare(kind, self.buf_start, end)
        };
        self.tokens.push(token);
    }

    /// Close the pending numeric lexeme.
    ///
    /// A lexeme with more than one decimal point is rejected here, at flush
    /// time, with the span of the whole lexeme.
    fn flush_number(&mut self, end: u32) -> Result<(), LexError> {
        let text = std::mem::take(&mut self.buf);
        let span = Span::new(self.buf_start, end);
        if text.matches('.').count() > 1 {
            return Err(LexError::new(LexErrorKind::MalformedNumber(text), span));
        }
        self.tokens.push(Token::new(TokenKind::NumberLiteral, text, span.start, span.end));
        self.state = ScanState::Default;
        Ok(())
    }

    /// Emit a zero-text token ending at the current cursor position.
    fn push_bare(&mut self, kind: TokenKind, start: u32) {
        self.tokens.push(Token::bare(kind, start, self.cursor.pos()));
    }

    /// Flush whatever lexeme is still pending at end of input.
    ///
    /// An open string can no longer be closed and fails the scan. A pending
    /// number or word is finalized exactly as a delimiter would have.
    fn finish(mut self) -> Result<Vec<Token>, LexError> {
        let end = self.cursor.pos();
        match self.state {
            ScanState::InString => Err(LexError::new(
                LexErrorKind::UnterminatedString,
                Span::new(self.buf_start, end),
            )),
            ScanState::InNumber => {
                self.flush_number(end)?;
                Ok(self.tokens)
            }
            ScanState::Default => {
                self.flush_word(end);
                Ok(self.tokens)
            }
        }
    }
}

// ── Character tables ─────────────────────────────────────────────────────

/// An entry in the operator lookahead table.
struct OpEntry {
    /// Kind when the next character does not extend the operator.
    /// `None` for pair-only operators (`&&`, `||`, `::`).
    single: Option<TokenKind>,
    /// Continuation character and the compound kind it produces.
    pair: Option<(char, TokenKind)>,
}

/// One-character lookahead table for operators, keyed by first character.
///
/// Each character resolves to its single kind unless the next input
/// character matches the listed continuation, in which case the compound
/// kind is produced and the continuation is consumed too. `&&`, `||` and
/// `::` exist only in pair form; `#` only stands alone.
fn op_entry(c: char) -> Option<OpEntry> {
    use TokenKind::*;

    let entry = match c {
        '+' => OpEntry { single: Some(Add), pair: Some(('=', AssignAdd)) },
        '-' => OpEntry { single: Some(Sub), pair: Some(('=', AssignSub)) },
        '*' => OpEntry { single: Some(Mul), pair: Some(('=', AssignMul)) },
        '/' => OpEntry { single: Some(Div), pair: Some(('=', AssignDiv)) },
        '%' => OpEntry { single: Some(Mod), pair: Some(('=', AssignMod)) },
        '^' => OpEntry { single: Some(Pow), pair: Some(('=', AssignPow)) },
        '=' => OpEntry { single: Some(Assign), pair: Some(('=', Eq)) },
        '!' => OpEntry { single: Some(Not), pair: Some(('=', NotEq)) },
        '<' => OpEntry { single: Some(Less), pair: Some(('=', LessEq)) },
        '>' => OpEntry { single: Some(Greater), pair: Some(('=', GreaterEq)) },
        '&' => OpEntry { single: None, pair: Some(('&', And)) },
        '|' => OpEntry { single: None, pair: Some(('|', Or)) },
        ':' => OpEntry { single: None, pair: Some((':', DoubleColon)) },
        '#' => OpEntry { single: Some(Length), pair: None },
        _ => return None,
    };
    Some(entry)
}

/// Single-character punctuation, emitted directly with no lookahead.
fn punct_kind(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::ParenOpen),
        ')' => Some(TokenKind::ParenClose),
        '{' => Some(TokenKind::BraceOpen),
        '}' => Some(TokenKind::BraceClose),
        '[' => Some(TokenKind::BracketOpen),
        ']' => Some(TokenKind::BracketClose),
        ',' => Some(TokenKind::Comma),
        _ => None,
    }
}

/// Decode a backslash escape inside a string literal.
fn decode_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        _ => None,
    }
}

/// Whether a character can start an identifier or keyword lexeme.
fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Whether a character can continue an identifier or keyword lexeme.
fn is_word_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Tokenizer::tokenize(source)
            .expect("scan should succeed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn empty_source_yields_no_tokens() {
        assert_eq!(Tokenizer::tokenize("").unwrap(), vec![]);
    }

    #[test]
    fn scan_simple_statement() {
        assert_eq!(
            kinds("count += 1"),
            vec![
                TokenKind::Identifier,
                TokenKind::AssignAdd,
                TokenKind::NumberLiteral,
            ]
        );
    }

    #[test]
    fn word_flush_classifies_keywords_and_literal_words() {
        assert_eq!(
            kinds("if ok true null nuevo"),
            vec![
                TokenKind::If,
                TokenKind::HandleCase,
                TokenKind::BoolLiteral,
                TokenKind::NullLiteral,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn spans_are_byte_accurate() {
        let tokens = Tokenizer::tokenize("while x < 10").unwrap();
        // while: 0-5
        assert_eq!(tokens[0].span, Span::new(0, 5));
        // x: 6-7
        assert_eq!(tokens[1].span, Span::new(6, 7));
        // <: 8-9
        assert_eq!(tokens[2].span, Span::new(8, 9));
        // 10: 10-12
        assert_eq!(tokens[3].span, Span::new(10, 12));
    }

    #[test]
    fn number_closed_by_letter_reprocesses_the_boundary_char() {
        let tokens = Tokenizer::tokenize("123abc").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::NumberLiteral);
        assert_eq!(tokens[0].text, "123");
        assert_eq!(tokens[0].span, Span::new(0, 3));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "abc");
        assert_eq!(tokens[1].span, Span::new(3, 6));
    }

    #[test]
    fn digits_extend_a_pending_word() {
        let tokens = Tokenizer::tokenize("abc123").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "abc123");
    }

    #[test]
    fn unterminated_string_fails_the_scan() {
        let err = Tokenizer::tokenize("\"abierto").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.span, Span::new(0, 8));
    }

    #[test]
    fn two_decimal_points_fail_the_scan() {
        let err = Tokenizer::tokenize("3.14.15").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::MalformedNumber("3.14.15".into()));
        assert_eq!(err.span, Span::new(0, 7));
    }
}
