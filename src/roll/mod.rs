mod ctx;
mod error;
mod outcome;
mod roller;

use crate::{term::Term, Limits};

pub type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, RollContext};
pub use error::RollError;
pub use outcome::{Fragment, Outcome};
pub use roller::Roller;

#[cfg(test)]
pub(crate) use roller::FixedRoller;

/// Rolls every term in order. The first failing term aborts the whole evaluation.
pub fn eval<R: Roller>(terms: &[Term], roller: &mut R, limits: Limits) -> RResult<Outcome> {
    RollContext::new(roller, limits).eval(terms)
}
