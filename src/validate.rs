use crate::{Error, Limits};
use once_cell::sync::Lazy;
use regex::Regex;

static DICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"d[0-9]+").unwrap_or_else(|e| unreachable!("invalid dice pattern: {}", e))
});

/// Cheap structural checks run before tokenizing.
///
/// Returns the formula with all whitespace removed.
pub fn validate(formula: &str, limits: &Limits) -> Result<String, Error> {
    if formula.is_empty() {
        return Err(Error::EmptyInput);
    }

    if DICE_PATTERN.is_match(formula) {
        return Err(Error::DicePattern);
    }

    let len = formula.chars().count();
    if len > limits.max_formula_len {
        return Err(Error::FormulaTooLong {
            len,
            max: limits.max_formula_len,
        });
    }

    let cleaned: String = formula.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(cleaned)
}
