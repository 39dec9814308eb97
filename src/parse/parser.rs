use super::error::{ParseError, SourcePosition};
use super::lexer::*;
use crate::common::*;
use crate::term::{ConstantTerm, RollTerm, Term};
use logos_iter::LogosIter;
use std::ops::Range;

type PResult<T = ()> = Result<T, ParseError>;

/// What the parser will accept next.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParseState {
    SignRequired,
    IntegerOrRoll,
    SignOrRoll,
    IntegerRequired,
}

pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    max_terms: usize,
    state: ParseState,
    sign: Sign,
    left: Option<UInt>,
    terms: Vec<Term>,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str, max_terms: usize) -> Self {
        Self {
            source: s,
            lexer: lexer(s),
            max_terms,
            state: ParseState::SignRequired,
            sign: Sign::Pos,
            left: None,
            terms: Vec::new(),
        }
    }

    pub fn parse(mut self) -> PResult<NonEmpty<Term>> {
        // Nothing outside ASCII can be part of a formula.
        if let Some((i, c)) = self.source.char_indices().find(|(_, c)| !c.is_ascii()) {
            return Err(ParseError::InvalidFormula {
                pos: SourcePosition::new(i..i + c.len_utf8(), c.to_string()),
                found: TokenKind::Error,
            });
        }

        // The first term is positive unless it says otherwise.
        if self.lexer.peek() != Some(&TokenKind::Minus) {
            self.step(TokenKind::Plus, None)?;
        }

        while let Some(token) = self.lexer.next() {
            let pos = SourcePosition::new(self.lexer.span(), self.lexer.slice());
            self.step(token, Some(pos))?;
        }

        // A trailing sign flushes the last term through the same transitions.
        self.step(TokenKind::Plus, None)?;

        let end = self.end();
        NonEmpty::try_from_vec(self.terms).map_err(|_| ParseError::InvalidFormula {
            pos: SourcePosition::new(end, ""),
            found: TokenKind::Plus,
        })
    }

    fn step(&mut self, token: TokenKind, pos: Option<SourcePosition>) -> PResult {
        use ParseState::*;
        use TokenKind::*;

        self.state = match (self.state, token) {
            (SignRequired, _) => {
                self.sign = self.expect_sign(token, pos)?;
                IntegerOrRoll
            }
            (IntegerOrRoll, Roll) => {
                // A bare indicator rolls a single cabbage.
                self.left = Some(1);
                IntegerRequired
            }
            (IntegerOrRoll, Integer(n)) => {
                self.left = n;
                SignOrRoll
            }
            (SignOrRoll, Roll) => IntegerRequired,
            (SignOrRoll, _) => {
                let sign = self.expect_sign(token, pos.clone())?;
                // A constant is shown verbatim, so it has to fit.
                let value = match self.left {
                    Some(value) => value,
                    None => return self.error(Integer(None), pos),
                };
                self.emit(ConstantTerm::new(self.sign, value))?;
                self.sign = sign;
                IntegerOrRoll
            }
            (IntegerRequired, Integer(sides)) => {
                // Counts and sides too wide for `UInt` are over every limit anyway.
                let count = self.left.unwrap_or(UInt::MAX);
                let sides = sides.unwrap_or(UInt::MAX);
                self.emit(RollTerm::new(self.sign, count, sides))?;
                SignRequired
            }
            (IntegerOrRoll | IntegerRequired, _) => return self.error(token, pos),
        };
        Ok(())
    }

    fn expect_sign(&self, token: TokenKind, pos: Option<SourcePosition>) -> PResult<Sign> {
        match token.as_sign() {
            Some(sign) => Ok(sign),
            None => self.error(token, pos),
        }
    }

    fn emit(&mut self, term: impl Into<Term>) -> PResult {
        if self.terms.len() >= self.max_terms {
            return Err(ParseError::TooManyTerms {
                max: self.max_terms,
            });
        }
        self.terms.push(term.into());
        Ok(())
    }

    fn error<T>(&self, found: TokenKind, pos: Option<SourcePosition>) -> PResult<T> {
        let pos = pos.unwrap_or_else(|| SourcePosition::new(self.end(), ""));
        Err(ParseError::InvalidFormula { pos, found })
    }

    fn end(&self) -> Range<usize> {
        self.source.len()..self.source.len()
    }
}
