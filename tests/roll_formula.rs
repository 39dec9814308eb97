use cabbage_roll::{roll_formula, roll_formula_with, Evaluator, Int, NonZeroUInt, Roller, UInt};
use rand::{rngs::StdRng, SeedableRng};

/// Rolls the same value no matter the die.
struct Fixed(UInt);

impl Roller for Fixed {
    fn draw(&mut self, count: usize, _: NonZeroUInt) -> Vec<UInt> {
        vec![self.0; count]
    }
}

fn roll_fixed(formula: &str, value: UInt) -> String {
    roll_formula_with(formula, Fixed(value))
}

#[test]
fn test_dice_error() {
    assert!(roll_formula("1d20").contains("TRY ROLLING CABBAGES"));
    assert!(roll_formula("c20 + d4").contains("TRY ROLLING CABBAGES"));
}

#[test]
fn test_long_formula() {
    assert!(roll_formula(&"1".repeat(1001)).contains("TOO LONG"));
}

#[test]
fn test_empty_formula() {
    assert!(roll_formula("").contains("NO CABBAGE ROLL SPECIFIED"));
    assert!(roll_formula("   ").contains("NO CABBAGE ROLL SPECIFIED"));
}

#[test]
fn test_formula_invalid() {
    for formula in ["donut", "1c", "c20+", "d\u{661}", "\u{ff11}c2"] {
        assert_eq!(
            roll_formula(formula),
            "PATHETIC HUMAN, YOUR CABBAGE FORMULA INVALID. TRY HARDER!",
            "formula {:?}",
            formula
        );
    }
}

#[test]
fn test_too_many_terms() {
    assert!(roll_formula("1+1+1+1+1+1").contains("TOO MANY TERMS"));
    assert_eq!(roll_fixed("1+1+1+1+c1", 1), "5 (1+1+1+1+[1])");
}

#[test]
fn test_sides() {
    assert!(roll_formula("1c0+1").contains("0-SIDED CABBAGE"));
}

#[test]
fn test_cabbage_count() {
    assert!(roll_formula("101c6").contains("DON'T HAVE THAT MANY"));
    assert!(roll_formula("100c6+c4").contains("DON'T HAVE THAT MANY"));
    assert!(roll_formula("0c1").contains("HOW TO ROLL"));
    assert!(roll_formula("10c100000000000000000000").contains("NO CABBAGE HAS"));
}

#[test]
fn test_roll() {
    assert_eq!(roll_fixed("c20", 17), "17 ([17])");
    assert_eq!(roll_fixed("1c20", 17), "17 ([17])");
    assert_eq!(roll_fixed("1c20-2", 17), "15 ([17]-2)");
    assert_eq!(roll_fixed(" 1c20 - 2 ", 17), "15 ([17]-2)");
}

#[test]
fn test_many_valid_rolls() {
    let cases = [
        ("1c2+1c3+1c4+1c5", "8 ([2]+[2]+[2]+[2])"),
        ("4c3", "8 ([2]+[2]+[2]+[2])"),
        ("1c2+1c3+1c4+2", "8 ([2]+[2]+[2]+2)"),
        ("1c2+1c3+1c4-2", "4 ([2]+[2]+[2]-2)"),
        ("-2+1c2+1c3+1c4", "4 (-2+[2]+[2]+[2])"),
        ("1c4+1+1c6", "5 ([2]+1+[2])"),
        ("-c6-c6", "-4 (-[2]-[2])"),
    ];
    for (formula, expected) in cases {
        assert_eq!(roll_fixed(formula, 2), expected, "formula {:?}", formula);
    }

    let expected = format!("200 ([2]{})", "+[2]".repeat(99));
    assert_eq!(roll_fixed("100c4", 2), expected);
}

#[test]
fn test_wide_constants() {
    assert_eq!(
        roll_formula("2000000000000000"),
        "2000000000000000 (2000000000000000)"
    );
    assert_eq!(
        roll_formula("9999999999999999999"),
        "9999999999999999999 (9999999999999999999)"
    );
    assert_eq!(
        roll_fixed("-18446744073709551615-18446744073709551615+c6", 6),
        "-36893488147419103224 (-18446744073709551615-18446744073709551615+[6])"
    );
    assert_eq!(
        roll_formula("18446744073709551616"),
        "PATHETIC HUMAN, YOUR CABBAGE FORMULA INVALID. TRY HARDER!"
    );
}

#[test]
fn test_seeded_rolls_replay() {
    let formula = "3c6+c20-4";
    let first = roll_formula_with(formula, StdRng::seed_from_u64(1234));
    let second = roll_formula_with(formula, StdRng::seed_from_u64(1234));
    assert_eq!(first, second);
}

#[test]
fn test_thread_rng_stays_in_range() {
    let mut evaluator = Evaluator::default();
    for _ in 0..100 {
        let outcome = evaluator.try_roll("4c6").unwrap();
        assert!((4..=24).contains(&outcome.total));
        assert_eq!(outcome.trace.len(), 4);
        assert_eq!(outcome.trace.iter().map(|f| f.value()).sum::<Int>(), outcome.total);
    }
}

#[test]
fn test_borrowed_rng() {
    let mut rng = StdRng::seed_from_u64(99);
    let reply = roll_formula_with("c1", &mut rng);
    assert_eq!(reply, "1 ([1])");
}
