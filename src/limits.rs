use crate::common::UInt;

/// Abuse caps applied while validating, parsing and rolling a formula.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// Longest accepted formula, in characters, before whitespace is stripped.
    pub max_formula_len: usize,
    /// Most terms a single formula may contain.
    pub max_terms: usize,
    /// Most cabbages rolled across all roll terms of one formula.
    pub max_rolls: UInt,
    /// Most sides a single cabbage may have.
    pub max_sides: UInt,
}

impl Limits {
    pub const DEFAULT: Self = Self {
        max_formula_len: 1000,
        max_terms: 5,
        max_rolls: 100,
        max_sides: 1_000_000_000,
    };
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
