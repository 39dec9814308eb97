use std::fmt::{self, Write};
use std::num::NonZeroU64;

pub type Int = i128;
pub type UInt = u64;
pub type NonZeroUInt = NonZeroU64;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// The sign carried by every term of a formula.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    pub const fn as_char(self) -> char {
        match self {
            Self::Pos => '+',
            Self::Neg => '-',
        }
    }

    /// Applies the sign to an unsigned magnitude. Exact for every [`UInt`].
    pub fn apply(self, value: UInt) -> Int {
        let value = Int::from(value);
        match self {
            Self::Pos => value,
            Self::Neg => -value,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}
