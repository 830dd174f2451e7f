//! Long-division stepper.
//!
//! Reproduces the written school procedure digit by digit: bring down the next digit,
//! find the quotient digit, subtract the product, carry the remainder. Leading zero
//! quotient digits are not written, but the partial dividend they leave behind keeps
//! growing until a nonzero digit fits.

use serde::Serialize;

/// One digit-processing iteration, in dividend order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivisionStep {
    /// Zero-based index of the dividend digit consumed by this step.
    pub position: usize,
    pub partial_dividend: u64,
    pub quotient_digit: u64,
    pub product: u64,
    pub remainder: u64,
    /// The dividend digit brought down for the next step, `None` on the last digit.
    pub next_digit_brought_down: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongDivision {
    pub steps: Vec<DivisionStep>,
    pub quotient: u64,
    pub remainder: u64,
}

/// Runs long division of `dividend` by `divisor`. A zero divisor is treated as one.
pub fn long_division(dividend: u64, divisor: u64) -> LongDivision {
    let divisor = divisor.max(1);
    let digits = decimal_digits(dividend);

    let mut steps = Vec::with_capacity(digits.len());
    let mut current = 0u64;
    let mut quotient = 0u64;
    let mut emitted_nonzero = false;

    for (position, &digit) in digits.iter().enumerate() {
        current = current * 10 + u64::from(digit);
        let quotient_digit = current / divisor;
        let next_digit_brought_down = digits.get(position + 1).copied();

        if quotient_digit == 0 && !emitted_nonzero {
            steps.push(DivisionStep {
                position,
                partial_dividend: current,
                quotient_digit: 0,
                product: 0,
                remainder: current,
                next_digit_brought_down,
            });
            continue;
        }

        let product = quotient_digit * divisor;
        let remainder = current - product;
        emitted_nonzero = true;
        quotient = quotient * 10 + quotient_digit;

        steps.push(DivisionStep {
            position,
            partial_dividend: current,
            quotient_digit,
            product,
            remainder,
            next_digit_brought_down,
        });
        current = remainder;
    }

    LongDivision {
        steps,
        quotient,
        remainder: current,
    }
}

/// Most significant digit first. Zero is the single digit `[0]`.
fn decimal_digits(mut n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push((n % 10) as u8);
        n /= 10;
    }
    digits.reverse();
    digits
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
