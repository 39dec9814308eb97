use super::lexer::TokenKind;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct SourcePosition {
    pub span: logos::Span,
    pub slice: String,
}

impl SourcePosition {
    pub(crate) fn new(span: logos::Span, slice: impl Into<String>) -> Self {
        Self {
            span,
            slice: slice.into(),
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.slice.is_empty() {
            write!(f, "end of formula (position {})", self.span.start)
        } else {
            write!(f, "{:?} at position {}", self.slice, self.span.start)
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A token that the current parse state cannot accept.
    #[error("PATHETIC HUMAN, YOUR CABBAGE FORMULA INVALID. TRY HARDER!")]
    InvalidFormula {
        pos: SourcePosition,
        found: TokenKind,
    },
    #[error("TOO MANY TERMS IN CABBAGE FORMULA. DOES NOT COMPUTE!")]
    TooManyTerms { max: usize },
}

impl ParseError {
    /// Where parsing stopped, for diagnostics; the user-facing message omits it.
    pub fn position(&self) -> Option<&SourcePosition> {
        match self {
            Self::InvalidFormula { pos, .. } => Some(pos),
            Self::TooManyTerms { .. } => None,
        }
    }
}
