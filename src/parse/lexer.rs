use crate::common::*;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    /// `None` when the literal does not fit in a [`UInt`].
    #[regex(r"[0-9]+", integer)]
    Integer(Option<UInt>),

    #[token("c")]
    Roll,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[error]
    Error,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Integer(_) => "<integer>",
            Roll => "'c'",
            Plus => "'+'",
            Minus => "'-'",
            Error => "<error>",
        }
    }

    pub fn as_sign(&self) -> Option<Sign> {
        Some(match self {
            Self::Plus => Sign::Pos,
            Self::Minus => Sign::Neg,
            _ => return None,
        })
    }
}

// Wrapped once more because logos reads a bare `None` as a lexing error.
fn integer(lex: &mut LogosLexer<TokenKind>) -> Option<Option<UInt>> {
    Some(lex.slice().parse().ok())
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
