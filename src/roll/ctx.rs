use super::{error::RollError, outcome::*, roller::Roller, RResult};
use crate::common::*;
use crate::term::{Contribute, Term};
use crate::Limits;

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Running state of one formula evaluation.
pub struct RollContext<'r, R> {
    limits: Limits,
    rolls: UInt,
    total: Int,
    trace: Vec<Fragment>,
    roller: &'r mut R,
}

impl<'r, R: Roller> RollContext<'r, R> {
    pub fn new(roller: &'r mut R, limits: Limits) -> Self {
        Self {
            limits,
            rolls: 0,
            total: 0,
            trace: Vec::new(),
            roller,
        }
    }

    fn count_rolls(&mut self, n: UInt) -> RResult<()> {
        self.rolls = self.rolls.saturating_add(n);
        if self.rolls > self.limits.max_rolls {
            Err(RollError::TooManyRolls {
                max: self.limits.max_rolls,
            })
        } else {
            Ok(())
        }
    }

    /// Checks a roll of `num` cabbages against the limits, then draws them.
    pub fn roll(&mut self, num: UInt, sides: UInt) -> RResult<Vec<UInt>> {
        self.count_rolls(num)?;

        let sides = NonZeroUInt::new(sides).ok_or(RollError::ZeroSidedDie)?;
        if sides.get() > self.limits.max_sides {
            return Err(RollError::TooManySides {
                sides: sides.get(),
                max: self.limits.max_sides,
            });
        }
        if num < 1 {
            return Err(RollError::NonPositiveCount);
        }

        // `num` is bounded by `max_rolls` here.
        let num = usize::try_from(num).unwrap_or(usize::MAX);
        Ok(self.roller.draw(num, sides))
    }

    pub fn add_constant(&mut self, sign: Sign, value: UInt) {
        self.total += sign.apply(value);
        self.trace.push(Fragment::Constant(sign, value));
    }

    pub fn add_roll(&mut self, sign: Sign, value: UInt) {
        log::trace!("rolled {}[{}]", sign, value);
        self.total += sign.apply(value);
        self.trace.push(Fragment::Roll(sign, value));
    }

    pub fn eval(mut self, terms: &[Term]) -> RResult<Outcome> {
        for term in terms {
            log::trace!("evaluating term {}", term);
            term.contribute(&mut self)?;
        }
        Ok(Outcome::new(self.total, self.trace))
    }
}
