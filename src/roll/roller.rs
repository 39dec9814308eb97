use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// A source of cabbage rolls.
///
/// Every [`Rng`] is a `Roller`; tests substitute a deterministic one.
pub trait Roller {
    /// Draws `count` independent values, each uniform in `1..=sides`.
    fn draw(&mut self, count: usize, sides: NonZeroUInt) -> Vec<UInt>;
}

impl<R: Rng> Roller for R {
    fn draw(&mut self, count: usize, sides: NonZeroUInt) -> Vec<UInt> {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(count)
            .collect()
    }
}

/// Rolls the same value `R` on every cabbage, whatever its sides.
#[cfg(test)]
pub(crate) struct FixedRoller(pub UInt);

#[cfg(test)]
impl Roller for FixedRoller {
    fn draw(&mut self, count: usize, _: NonZeroUInt) -> Vec<UInt> {
        vec![self.0; count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn sides(n: UInt) -> NonZeroUInt {
        NonZeroUInt::new(n).unwrap()
    }

    #[test]
    fn test_rng_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws = rng.draw(1000, sides(6));
        assert!(draws.iter().all(|x| (1..=6).contains(x)));
    }

    #[test]
    fn test_one_sided_always_rolls_one() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(rng.draw(50, sides(1)), vec![1; 50]);
    }

    #[test]
    fn test_draw_count() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(rng.draw(17, sides(20)).len(), 17);
        assert!(rng.draw(0, sides(20)).is_empty());
    }

    #[test]
    fn test_seeded_draws_replay() {
        let first = StdRng::seed_from_u64(5).draw(10, sides(1_000_000_000));
        let second = StdRng::seed_from_u64(5).draw(10, sides(1_000_000_000));
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_roller() {
        assert_eq!(FixedRoller(2).draw(4, sides(6)), vec![2; 4]);
        assert_eq!(FixedRoller(17).draw(1, sides(3)), vec![17]);
    }
}
