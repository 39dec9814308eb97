use crate::common::UInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error("I DON'T HAVE THAT MANY CABBAGES. SORRY!")]
    TooManyRolls { max: UInt },
    #[error("I DON'T EVEN KNOW WHAT A 0-SIDED CABBAGE IS!")]
    ZeroSidedDie,
    #[error("NO CABBAGE HAS THAT MANY SIDES. SORRY!")]
    TooManySides { sides: UInt, max: UInt },
    #[error("HOW TO ROLL NO CABBAGES? DOES NOT COMPUTE!")]
    NonPositiveCount,
}
