//! Token types for the statement lexer.

use std::fmt;

use super::Span;
use crate::ast::Operator;

/// Reserved words and symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reserved {
    // Symbols
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// =
    Eq,
    /// !=
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,

    // Words
    Select,
    Insert,
    Into,
    Values,
    Update,
    Delete,
    From,
    Where,
    Set,
    As,
    And,
}

/// Symbolic reserved tokens, longest first so `>=` never reads as `>` `=`.
pub(crate) const SYMBOLS: &[(&str, Reserved)] = &[
    (">=", Reserved::GtEq),
    ("<=", Reserved::LtEq),
    ("!=", Reserved::NotEq),
    ("(", Reserved::LeftParen),
    (")", Reserved::RightParen),
    (",", Reserved::Comma),
    ("=", Reserved::Eq),
    (">", Reserved::Gt),
    ("<", Reserved::Lt),
];

impl Reserved {
    /// Looks up a word-shaped reserved token (case-insensitive).
    #[must_use]
    pub fn from_word(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "UPDATE" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "SET" => Some(Self::Set),
            "AS" => Some(Self::As),
            "AND" => Some(Self::And),
            _ => None,
        }
    }

    /// Returns the canonical spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Comma => ",",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Set => "SET",
            Self::As => "AS",
            Self::And => "AND",
        }
    }

    /// Returns the comparison operator this token spells, if any.
    #[must_use]
    pub const fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Eq => Some(Operator::Eq),
            Self::NotEq => Some(Operator::Ne),
            Self::Lt => Some(Operator::Lt),
            Self::LtEq => Some(Operator::Lte),
            Self::Gt => Some(Operator::Gt),
            Self::GtEq => Some(Operator::Gte),
            _ => None,
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Single-quoted literal, escapes already resolved (e.g. 'it\'s' -> it's)
    Quoted(String),
    /// Reserved word or symbol
    Reserved(Reserved),
    /// Bare identifier, `*`, or a call-shaped token such as `version(a)`
    Identifier(String),
    /// Numeric literal as written (e.g. -1.5)
    Number(String),
    /// Unterminated literal or unexpected character
    Error(String),
    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quoted(s) => write!(f, "'{s}'"),
            Self::Reserved(r) => f.write_str(r.as_str()),
            Self::Identifier(s) | Self::Number(s) | Self::Error(s) => f.write_str(s),
            Self::Eof => f.write_str("end of input"),
        }
    }
}

/// A token with its span in the statement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the statement text.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this token is the given reserved word or symbol.
    #[must_use]
    pub fn is(&self, reserved: Reserved) -> bool {
        self.kind == TokenKind::Reserved(reserved)
    }

    /// Returns the comparison operator if this is one.
    #[must_use]
    pub const fn as_operator(&self) -> Option<Operator> {
        match &self.kind {
            TokenKind::Reserved(reserved) => reserved.as_operator(),
            _ => None,
        }
    }

    /// Returns the identifier text, excluding the lone `*`.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(s) if s != "*" => Some(s),
            _ => None,
        }
    }

    /// Like [`Token::as_name`], but also rejects call-shaped identifiers.
    #[must_use]
    pub fn as_column(&self) -> Option<&str> {
        self.as_name().filter(|s| !s.contains('('))
    }

    /// Returns the text of this token as it appears in `source`.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start..self.span.end]
    }
}
