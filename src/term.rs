use crate::common::*;
use crate::roll::{RResult, RollContext, Roller};
use std::fmt;

/// One signed additive component of a formula.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[enum_dispatch::enum_dispatch(Contribute)]
pub enum Term {
    Constant(ConstantTerm),
    Roll(RollTerm),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(x) => x.fmt(f),
            Self::Roll(x) => x.fmt(f),
        }
    }
}

/// Adds a term's value to a running evaluation.
#[enum_dispatch::enum_dispatch]
pub trait Contribute {
    fn contribute<R: Roller>(&self, ctx: &mut RollContext<'_, R>) -> RResult<()>;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ConstantTerm {
    pub sign: Sign,
    pub value: UInt,
}

impl ConstantTerm {
    pub const fn new(sign: Sign, value: UInt) -> Self {
        Self { sign, value }
    }
}

impl Contribute for ConstantTerm {
    fn contribute<R: Roller>(&self, ctx: &mut RollContext<'_, R>) -> RResult<()> {
        ctx.add_constant(self.sign, self.value);
        Ok(())
    }
}

impl fmt::Display for ConstantTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.value)
    }
}

/// `count` cabbages with `sides` sides each. Neither is range-checked until rolled.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RollTerm {
    pub sign: Sign,
    pub count: UInt,
    pub sides: UInt,
}

impl RollTerm {
    pub const fn new(sign: Sign, count: UInt, sides: UInt) -> Self {
        Self { sign, count, sides }
    }
}

impl Contribute for RollTerm {
    fn contribute<R: Roller>(&self, ctx: &mut RollContext<'_, R>) -> RResult<()> {
        for value in ctx.roll(self.count, self.sides)? {
            ctx.add_roll(self.sign, value);
        }
        Ok(())
    }
}

impl fmt::Display for RollTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}c{}", self.sign, self.count, self.sides)
    }
}
