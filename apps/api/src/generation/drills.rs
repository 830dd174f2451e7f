//! Specialised practice drills.
//!
//! Each drill targets one skill and guarantees it on every problem: a real carry,
//! a real borrow, a table fact, or round-number mental arithmetic.

use tracing::debug;

use crate::errors::ConfigError;
use crate::generation::arithmetic::{Operator, Problem};
use crate::generation::config::validate_count;
use crate::generation::random::{pick, RandomSource};

/// Multiplication-table facts with both factors in `[1, max_factor]`.
pub fn multiplication_table<R: RandomSource + ?Sized>(
    count: usize,
    max_factor: u32,
    rng: &mut R,
) -> Result<Vec<Problem>, ConfigError> {
    validate_count(count)?;
    if max_factor == 0 {
        return Err(ConfigError::ZeroFactor);
    }

    let problems = (0..count)
        .map(|_| {
            let a = rng.next_in_range(1, max_factor);
            let b = rng.next_in_range(1, max_factor);
            Problem::new(Operator::Mul, a, b)
        })
        .collect();

    debug!("Generated {count} table facts up to {max_factor}×{max_factor}");
    Ok(problems)
}

/// Two-digit additions whose ones digits always sum to 10 or more.
///
/// When the first draw would not carry, the second ones digit is raised to at least
/// `10 - a0` (plus a little jitter, capped at 9). A zero ones digit on the first
/// operand is redrawn first, since no single digit can bring it to ten.
pub fn two_digit_carry_addition<R: RandomSource + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<Problem>, ConfigError> {
    validate_count(count)?;

    let problems = (0..count)
        .map(|_| {
            let a_tens = rng.next_in_range(1, 9);
            let mut a_ones = rng.next_in_range(0, 9);
            let b_tens = rng.next_in_range(1, 9);
            let mut b_ones = rng.next_in_range(0, 9);

            if a_ones + b_ones < 10 {
                if a_ones == 0 {
                    a_ones = rng.next_in_range(1, 9);
                }
                b_ones = (10 - a_ones + rng.next_in_range(0, 4)).min(9);
            }

            Problem::new(Operator::Add, a_tens * 10 + a_ones, b_tens * 10 + b_ones)
        })
        .collect();

    debug!("Generated {count} carry additions");
    Ok(problems)
}

/// Two-digit subtractions that always borrow: the minuend is larger but its ones
/// digit is smaller than the subtrahend's.
///
/// A draw that would not borrow is replaced by one built digit by digit with the
/// ordering enforced. Both operands keep two digits.
pub fn two_digit_borrow_subtraction<R: RandomSource + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<Problem>, ConfigError> {
    validate_count(count)?;

    let problems = (0..count)
        .map(|_| {
            let mut minuend = rng.next_in_range(10, 99);
            let mut subtrahend = rng.next_in_range(10, 99);

            if minuend <= subtrahend || minuend % 10 >= subtrahend % 10 {
                let minuend_ones = rng.next_in_range(0, 8);
                let subtrahend_ones = rng.next_in_range(minuend_ones + 1, 9);
                let minuend_tens = rng.next_in_range(2, 9);
                let subtrahend_tens = rng.next_in_range(1, minuend_tens - 1);
                minuend = minuend_tens * 10 + minuend_ones;
                subtrahend = subtrahend_tens * 10 + subtrahend_ones;
            }

            Problem::new(Operator::Sub, minuend, subtrahend)
        })
        .collect();

    debug!("Generated {count} borrow subtractions");
    Ok(problems)
}

/// Mental arithmetic on whole tens or whole hundreds.
///
/// One base per problem, both operands `k × base` with `k ∈ [1, 9]`, larger operand
/// first, `+` or `-` at even odds.
pub fn round_number_oral<R: RandomSource + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<Problem>, ConfigError> {
    validate_count(count)?;

    let problems = (0..count)
        .map(|_| {
            let base = pick(rng, &[10u32, 100]);
            let x = rng.next_in_range(1, 9) * base;
            let y = rng.next_in_range(1, 9) * base;
            let op = pick(rng, &[Operator::Add, Operator::Sub]);
            Problem::new(op, x.max(y), x.min(y))
        })
        .collect();

    debug!("Generated {count} round-number problems");
    Ok(problems)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::random::ScriptedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_table_factors_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        let problems = multiplication_table(500, 9, &mut rng).unwrap();
        assert_eq!(problems.len(), 500);
        for p in &problems {
            assert_eq!(p.op(), Operator::Mul);
            assert!((1..=9).contains(&p.a()) && (1..=9).contains(&p.b()));
            assert_eq!(p.ans(), i128::from(p.a()) * i128::from(p.b()));
        }
    }

    #[test]
    fn test_table_rejects_zero_factor() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(
            multiplication_table(5, 0, &mut rng),
            Err(ConfigError::ZeroFactor)
        );
    }

    #[test]
    fn test_carry_addition_always_carries() {
        let mut rng = StdRng::seed_from_u64(17);
        for p in two_digit_carry_addition(1000, &mut rng).unwrap() {
            assert_eq!(p.op(), Operator::Add);
            assert!((10..=99).contains(&p.a()) && (10..=99).contains(&p.b()));
            assert!(p.a() % 10 + p.b() % 10 >= 10, "{p} does not carry");
        }
    }

    #[test]
    fn test_carry_addition_repairs_zero_ones_digit() {
        // a = 3|0, b = 4|2 → no carry; a0 redrawn as 6, jitter 0 → b0 = 4
        let mut source = ScriptedSource::new([3, 0, 4, 2, 6, 0]);
        let problems = two_digit_carry_addition(1, &mut source).unwrap();
        assert_eq!(problems[0], Problem::new(Operator::Add, 36, 44));
    }

    #[test]
    fn test_borrow_subtraction_always_borrows() {
        let mut rng = StdRng::seed_from_u64(23);
        for p in two_digit_borrow_subtraction(1000, &mut rng).unwrap() {
            assert_eq!(p.op(), Operator::Sub);
            assert!(p.a() > p.b(), "{p} is not positive");
            assert!(p.a() % 10 < p.b() % 10, "{p} does not borrow");
            assert!((10..=99).contains(&p.a()) && (10..=99).contains(&p.b()));
        }
    }

    #[test]
    fn test_borrow_subtraction_keeps_good_draw() {
        // 52 - 27 already borrows
        let mut source = ScriptedSource::new([52, 27]);
        let problems = two_digit_borrow_subtraction(1, &mut source).unwrap();
        assert_eq!(problems[0], Problem::new(Operator::Sub, 52, 27));
    }

    #[test]
    fn test_borrow_subtraction_rebuilds_bad_draw() {
        // 58 - 21 does not borrow → ones 3 / 7, tens 6 / 2
        let mut source = ScriptedSource::new([58, 21, 3, 7, 6, 2]);
        let problems = two_digit_borrow_subtraction(1, &mut source).unwrap();
        assert_eq!(problems[0], Problem::new(Operator::Sub, 63, 27));
    }

    #[test]
    fn test_round_numbers_are_ordered_multiples() {
        let mut rng = StdRng::seed_from_u64(29);
        for p in round_number_oral(500, &mut rng).unwrap() {
            assert!(matches!(p.op(), Operator::Add | Operator::Sub));
            assert!(p.a() >= p.b());
            assert!(p.ans() >= 0);
            let hundreds = p.a() % 100 == 0 && p.b() % 100 == 0;
            let tens = p.a() <= 90 && p.b() <= 90 && p.a() % 10 == 0 && p.b() % 10 == 0;
            assert!(hundreds || tens, "{p} mixes bases");
        }
    }

    #[test]
    fn test_round_numbers_scripted() {
        // base index 1 → 100, k = 2 and 7, op index 1 → Sub
        let mut source = ScriptedSource::new([1, 2, 7, 1]);
        let problems = round_number_oral(1, &mut source).unwrap();
        assert_eq!(problems[0], Problem::new(Operator::Sub, 700, 200));
    }

    #[test]
    fn test_drills_reject_zero_count() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            two_digit_carry_addition(0, &mut rng),
            Err(ConfigError::ZeroCount)
        );
        assert_eq!(round_number_oral(0, &mut rng), Err(ConfigError::ZeroCount));
    }
}
