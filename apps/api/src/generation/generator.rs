//! Constrained problem generation for the general oral and vertical worksheets.
//!
//! Flow per problem: draw operator → draw operands → post-draw correction
//! (swap for non-negative subtraction, rebuild the dividend for exact division).
//!
//! Randomness comes from the caller's `RandomSource`; nothing here keeps state
//! between calls.

use tracing::debug;

use crate::errors::ConfigError;
use crate::generation::arithmetic::{Operator, Problem};
use crate::generation::config::{digit_range, OralConfig, VerticalConfig};
use crate::generation::random::{pick, RandomSource};

// ────────────────────────────────────────────────────────────────────────────
// Oral problems
// ────────────────────────────────────────────────────────────────────────────

/// Generates `config.count` oral problems with operands drawn from `[min, max]`.
///
/// With exact division the dividend is rebuilt as `b × q`, `q ∈ [1, max(1, max / b)]`,
/// so it never exceeds `max(max, 1)` and may fall below `min`. A `[0, 0]` range
/// therefore still yields `1 ÷ 1`, since a zero divisor is never emitted.
pub fn generate_oral<R: RandomSource + ?Sized>(
    config: &OralConfig,
    rng: &mut R,
) -> Result<Vec<Problem>, ConfigError> {
    config.validate()?;
    let operators = config.distinct_operators();

    let problems: Vec<Problem> = (0..config.count)
        .map(|_| {
            let op = pick(rng, &operators);
            let a = rng.next_in_range(config.min, config.max);
            let b = rng.next_in_range(config.min, config.max);
            constrain(
                op,
                a,
                b,
                config.max,
                config.enforce_non_negative_subtraction,
                config.enforce_exact_division,
                rng,
            )
        })
        .collect();

    debug!(
        "Generated {} oral problems over [{}, {}] with {:?}",
        problems.len(),
        config.min,
        config.max,
        operators
    );
    Ok(problems)
}

// ────────────────────────────────────────────────────────────────────────────
// Vertical problems
// ────────────────────────────────────────────────────────────────────────────

/// Generates `config.count` vertical problems for a single operator, with operand
/// widths fixed by `digits_a` / `digits_b`.
pub fn generate_vertical<R: RandomSource + ?Sized>(
    config: &VerticalConfig,
    rng: &mut R,
) -> Result<Vec<Problem>, ConfigError> {
    config.validate()?;
    let (low_a, high_a) = digit_range(config.digits_a);
    let (low_b, high_b) = digit_range(config.digits_b);

    let problems: Vec<Problem> = (0..config.count)
        .map(|_| {
            let a = rng.next_in_range(low_a, high_a);
            let b = rng.next_in_range(low_b, high_b);

            if config.op == Operator::Sub && config.favor_borrow {
                let (top, bottom) = if config.enforce_non_negative_subtraction && a < b {
                    (b, a)
                } else {
                    (a, b)
                };
                // Only nudge when the bumped subtrahend keeps its width and its order.
                if top % 10 >= bottom % 10 && bottom < high_b {
                    let bumped = bottom + 1;
                    let keeps_order = !config.enforce_non_negative_subtraction || bumped <= top;
                    if keeps_order {
                        return Problem::new(Operator::Sub, top, bumped);
                    }
                }
                return Problem::new(Operator::Sub, top, bottom);
            }

            constrain(
                config.op,
                a,
                b,
                high_a,
                config.enforce_non_negative_subtraction,
                config.enforce_exact_division,
                rng,
            )
        })
        .collect();

    debug!(
        "Generated {} vertical {:?} problems ({}-digit by {}-digit)",
        problems.len(),
        config.op,
        config.digits_a,
        config.digits_b
    );
    Ok(problems)
}

// ────────────────────────────────────────────────────────────────────────────
// Post-draw correction
// ────────────────────────────────────────────────────────────────────────────

/// Applies the subtraction and division constraints to a raw draw.
///
/// `bound` caps the rebuilt dividend for exact division.
fn constrain<R: RandomSource + ?Sized>(
    op: Operator,
    mut a: u32,
    mut b: u32,
    bound: u32,
    non_negative_subtraction: bool,
    exact_division: bool,
    rng: &mut R,
) -> Problem {
    match op {
        Operator::Sub if non_negative_subtraction && a < b => {
            std::mem::swap(&mut a, &mut b);
        }
        Operator::Div => {
            if b == 0 {
                b = 1;
            }
            if exact_division {
                let q = rng.next_in_range(1, (bound / b).max(1));
                a = b * q;
            }
        }
        _ => {}
    }
    Problem::new(op, a, b)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
