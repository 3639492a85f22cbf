//! Statement lexer.
//!
//! A hand-written cursor that classifies one token at a time at a byte
//! offset: quoted literals, reserved words and symbols, bare identifiers
//! (including call-shaped ones such as `version(a)`), and numbers.

mod cursor;
mod span;
mod token;

pub use cursor::Cursor;
pub use span::Span;
pub use token::{Reserved, Token, TokenKind};
