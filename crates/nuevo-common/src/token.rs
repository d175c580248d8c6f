use serde::Serialize;

use crate::span::Span;

/// A token produced by the Nuevo tokenizer.
///
/// `text` carries the raw lexeme for the literal family (identifiers,
/// numbers, strings, booleans, null) and is empty for every other kind,
/// whose spelling is already fixed by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Create a token that carries lexeme text.
    pub fn new(kind: TokenKind, text: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            span: Span::new(start, end),
        }
    }

    /// Create a token with empty text, for kinds whose spelling is fixed
    /// (keywords, punctuation, operators).
    pub fn bare(kind: TokenKind, start: u32, end: u32) -> Self {
        Self {
            kind,
            text: String::new(),
            span: Span::new(start, end),
        }
    }
}

/// Every kind of token in the Nuevo language.
///
/// This enum is the complete vocabulary for the tokenizer. It covers the
/// literal family, keywords, punctuation, and operators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenKind {
    // ── Literals (5) ───────────────────────────────────────────────────
    /// Regular identifier, e.g. `foo`, `my_var`, `count2`.
    Identifier,
    /// Numeric literal, e.g. `42`, `2.5`.
    NumberLiteral,
    /// `true` or `false`. The text distinguishes the two values.
    BoolLiteral,
    /// String literal. The text is the decoded payload without the quotes.
    StringLiteral,
    /// `null`.
    NullLiteral,

    // ── Keywords (10) ──────────────────────────────────────────────────
    Module,
    Function,
    If,
    ElseIf,
    Else,
    For,
    Return,
    While,
    Handle,
    /// The `ok` arm introducer inside a `handle` block.
    HandleCase,

    // ── Punctuation (8) ────────────────────────────────────────────────
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `::`
    DoubleColon,
    /// `,`
    Comma,

    // ── Operators (23) ─────────────────────────────────────────────────
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEq,
    /// `>=`
    GreaterEq,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `=`
    Assign,
    /// `+=`
    AssignAdd,
    /// `-=`
    AssignSub,
    /// `*=`
    AssignMul,
    /// `/=`
    AssignDiv,
    /// `%=`
    AssignMod,
    /// `^=`
    AssignPow,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,
    /// `#` unary length operator
    Length,
}

impl TokenKind {
    /// Whether this kind belongs to the literal family, i.e. whether tokens
    /// of this kind carry their lexeme in [`Token::text`].
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::NumberLiteral
                | TokenKind::BoolLiteral
                | TokenKind::StringLiteral
                | TokenKind::NullLiteral
        )
    }
}

/// Look up a keyword from its string representation.
///
/// Returns `Some(TokenKind)` if the string is a Nuevo keyword, `None`
/// otherwise. The tokenizer calls this when classifying a finished lexeme,
/// so keywords and identifiers share one scan path.
pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
    match s {
        "module" => Some(TokenKind::Module),
        "function" => Some(TokenKind::Function),
        "if" => Some(TokenKind::If),
        "elseif" => Some(TokenKind::ElseIf),
        "else" => Some(TokenKind::Else),
        "for" => Some(TokenKind::For),
        "return" => Some(TokenKind::Return),
        "while" => Some(TokenKind::While),
        "handle" => Some(TokenKind::Handle),
        "ok" => Some(TokenKind::HandleCase),
        _ => None,
    }
}

/// Look up a literal word (`true`, `false`, `null`).
///
/// Kept separate from [`keyword_from_str`] because these classify into the
/// literal family and keep their text, unlike keywords.
pub fn literal_from_str(s: &str) -> Option<TokenKind> {
    match s {
        "true" | "false" => Some(TokenKind::BoolLiteral),
        "null" => Some(TokenKind::NullLiteral),
        _ => None,
    }
}
