//! Rolls polyhedral cabbage formulas such as `2c6+1c20-3`.
//!
//! A formula is a chain of signed terms, each either a constant or a roll of
//! `[count]c<sides>`. Rolling one yields the total alongside a trace of every
//! cabbage, for example `19 ([4]+[1]+[17]-3)`.
//!
//! ```
//! let reply = cabbage_roll::roll_formula("1c20+2");
//! assert!(reply.ends_with(")"));
//!
//! assert!(cabbage_roll::roll_formula("1d20").contains("TRY ROLLING CABBAGES"));
//! ```

pub use common::{Int, NonEmpty, NonZeroUInt, Sign, UInt};
pub use error::Error;
pub use evaluator::Evaluator;
pub use limits::Limits;
pub use parse::{parse, ParseError, ParseState, SourcePosition, TokenKind};
pub use roll::{eval, DefaultRoller, Fragment, Outcome, RResult, RollContext, RollError, Roller};
pub use term::{ConstantTerm, Contribute, RollTerm, Term};
pub use validate::validate;

mod common;
mod error;
mod evaluator;
mod limits;
mod parse;
mod roll;
mod term;
mod validate;

/// Rolls `formula` with the thread-local generator.
///
/// Never panics on bad input: every rejection comes back as its message.
pub fn roll_formula(formula: &str) -> String {
    Evaluator::default().roll(formula)
}

/// Rolls `formula` with the given random source.
///
/// Any [`rand::Rng`] works, including a borrowed one (`&mut rng`).
pub fn roll_formula_with<R: Roller>(formula: &str, roller: R) -> String {
    Evaluator::new(roller).roll(formula)
}
