mod error;
mod lexer;
mod parser;

use crate::{common::NonEmpty, term::Term, Limits};

pub use error::{ParseError, SourcePosition};
pub use lexer::TokenKind;
pub use parser::ParseState;

/// Splits a whitespace-free formula into its signed terms, in formula order.
pub fn parse(s: &str, limits: &Limits) -> Result<NonEmpty<Term>, ParseError> {
    parser::Parser::new(s, limits.max_terms).parse()
}
