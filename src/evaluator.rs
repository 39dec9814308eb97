use crate::roll::{self, DefaultRoller, Outcome, Roller};
use crate::{parse, validate, Error, Limits};

/// Validates, parses and rolls formulas against one random source.
pub struct Evaluator<R = DefaultRoller> {
    roller: R,
    limits: Limits,
}

impl<R: Roller> Evaluator<R> {
    pub fn new(roller: R) -> Self {
        Self {
            roller,
            limits: Limits::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Rolls `formula`, stopping at the first stage that rejects it.
    pub fn try_roll(&mut self, formula: &str) -> Result<Outcome, Error> {
        let cleaned = validate::validate(formula, &self.limits)?;
        let terms = parse::parse(&cleaned, &self.limits)?;
        let outcome = roll::eval(&terms, &mut self.roller, self.limits)?;
        Ok(outcome)
    }

    /// Rolls `formula` and renders either the outcome or the reason it was refused.
    pub fn roll(&mut self, formula: &str) -> String {
        match self.try_roll(formula) {
            Ok(outcome) => {
                log::debug!("rolled {:?}: {}", formula, outcome);
                outcome.to_string()
            }
            Err(why) => {
                match &why {
                    Error::Parse(e) => match e.position() {
                        Some(pos) => log::debug!("rejected {:?} at {}: {:?}", formula, pos, e),
                        None => log::debug!("rejected {:?}: {:?}", formula, e),
                    },
                    _ => log::debug!("rejected {:?}: {:?}", formula, why),
                }
                why.to_string()
            }
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}
