//! Token cursor over a single statement.

use super::token::SYMBOLS;
use super::{Reserved, Span, Token, TokenKind};

/// A cursor that classifies the token at its current byte offset.
///
/// [`Cursor::peek`] never moves the cursor; [`Cursor::pop`] moves past the
/// peeked token and the whitespace that follows it. Leading whitespace is
/// skipped on construction, so offsets always refer to the caller's text.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    /// End of the last popped token, before the whitespace after it.
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first token of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut cursor = Self {
            input,
            pos: 0,
            end: 0,
        };
        cursor.skip_whitespace();
        cursor.end = cursor.pos;
        cursor
    }

    /// The current byte offset.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// The offset just past the last popped token. Trailing whitespace is
    /// not counted, so at the end of input this is the end of the trimmed
    /// statement.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns true once every token has been popped.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Classifies the token at the current offset without consuming it.
    #[must_use]
    pub fn peek(&self) -> Token {
        Scanner::new(self.input, self.pos).scan()
    }

    /// Consumes the token at the current offset and any whitespace after it.
    pub fn pop(&mut self) -> Token {
        let token = self.peek();
        self.pos = token.span.end;
        self.end = token.span.end;
        self.skip_whitespace();
        token
    }

    /// Pops every remaining token, ending with [`TokenKind::Eof`].
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.pop();
            let done = token.is_eof() || token.span.is_empty();
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scans exactly one token starting at a fixed offset.
struct Scanner<'a> {
    input: &'a str,
    start: usize,
    pos: usize,
}

impl<'a> Scanner<'a> {
    const fn new(input: &'a str, start: usize) -> Self {
        Self {
            input,
            start,
            pos: start,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    fn scan(mut self) -> Token {
        let Some(c) = self.peek() else {
            return self.make_token(TokenKind::Eof);
        };

        if c == '\'' {
            return self.scan_quoted();
        }
        if let Some(token) = self.scan_symbol() {
            return token;
        }

        match c {
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_word(),
            '*' => {
                self.advance();
                self.make_token(TokenKind::Identifier(String::from("*")))
            }
            c if c.is_ascii_digit() || c == '-' => self.scan_number(),
            _ => {
                self.advance();
                self.make_token(TokenKind::Error(format!("unexpected character: {c}")))
            }
        }
    }

    /// Scans a single-quoted literal. `\'` and `\\` are unescaped; any other
    /// backslash pair is kept as written.
    fn scan_quoted(&mut self) -> Token {
        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.advance() {
                Some('\'') => return self.make_token(TokenKind::Quoted(value)),
                Some('\\') => match self.advance() {
                    Some(c @ ('\'' | '\\')) => value.push(c),
                    Some(c) => {
                        value.push('\\');
                        value.push(c);
                    }
                    None => break,
                },
                Some(c) => value.push(c),
                None => break,
            }
        }

        self.make_token(TokenKind::Error(String::from(
            "unterminated quoted literal",
        )))
    }

    fn scan_symbol(&mut self) -> Option<Token> {
        let rest = &self.input[self.pos..];
        let (text, reserved) = SYMBOLS
            .iter()
            .find(|(text, _)| rest.starts_with(*text))?;
        self.pos += text.len();
        Some(self.make_token(TokenKind::Reserved(*reserved)))
    }

    /// Scans a reserved word or an identifier. A non-reserved word directly
    /// followed by `(` takes everything up to the first `)` with it.
    fn scan_word(&mut self) -> Token {
        self.eat_while(is_word_char);

        let word = &self.input[self.start..self.pos];
        if let Some(reserved) = Reserved::from_word(word) {
            return self.make_token(TokenKind::Reserved(reserved));
        }

        if self.peek() == Some('(') {
            if let Some(close) = self.input[self.pos..].find(')') {
                self.pos += close + 1;
            }
        }

        let text = &self.input[self.start..self.pos];
        self.make_token(TokenKind::Identifier(String::from(text)))
    }

    fn scan_number(&mut self) -> Token {
        if self.peek() == Some('-') {
            self.advance();
        }

        let digits = self.pos;
        self.eat_while(|c| c.is_ascii_digit());
        let mut valid = self.pos > digits;

        if valid && self.peek() == Some('.') {
            self.advance();
            let fraction = self.pos;
            self.eat_while(|c| c.is_ascii_digit());
            valid = self.pos > fraction;
        }

        // 12ab, 1.2.3
        if self.peek().is_some_and(|c| is_word_char(c) || c == '.') {
            self.eat_while(|c| is_word_char(c) || c == '.');
            valid = false;
        }

        let text = &self.input[self.start..self.pos];
        if valid {
            self.make_token(TokenKind::Number(String::from(text)))
        } else {
            self.make_token(TokenKind::Error(format!("malformed number: {text}")))
        }
    }
}
