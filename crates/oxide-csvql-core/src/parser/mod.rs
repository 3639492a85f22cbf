//! Statement parser
//!
//! A state machine that reads one token per transition and fills in a
//! [`crate::Query`] as it goes, followed by a validation pass over the
//! finished query.

mod error;
mod parser;
mod state;
mod validate;

pub use error::{BatchError, ErrorKind, ParseError};
pub use parser::Parser;
pub use state::State;
