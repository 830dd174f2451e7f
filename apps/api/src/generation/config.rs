//! Generation parameter bundles.
//!
//! Each struct deserializes with the worksheet defaults filled in, so a request only
//! names the settings it changes. `validate` runs before any drawing happens.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::generation::arithmetic::Operator;

/// Widest operand a vertical problem may ask for; `10^9 - 1` still fits in a `u32`.
pub const MAX_DIGITS: u32 = 9;

/// Default bound for multiplication-table factors.
pub const DEFAULT_MAX_FACTOR: u32 = 9;

// ────────────────────────────────────────────────────────────────────────────
// Oral (mental arithmetic) problems
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OralConfig {
    pub count: usize,
    /// Treated as a set: duplicates do not change the odds of an operator.
    pub operators: Vec<Operator>,
    pub min: u32,
    pub max: u32,
    pub enforce_non_negative_subtraction: bool,
    pub enforce_exact_division: bool,
}

impl Default for OralConfig {
    fn default() -> Self {
        Self {
            count: 60,
            operators: Operator::ALL.to_vec(),
            min: 0,
            max: 100,
            enforce_non_negative_subtraction: true,
            enforce_exact_division: true,
        }
    }
}

impl OralConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_count(self.count)?;
        if self.operators.is_empty() {
            return Err(ConfigError::NoOperators);
        }
        if self.min > self.max {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// The allowed operators with duplicates removed, in first-seen order.
    pub fn distinct_operators(&self) -> Vec<Operator> {
        let mut distinct = Vec::with_capacity(self.operators.len());
        for &op in &self.operators {
            if !distinct.contains(&op) {
                distinct.push(op);
            }
        }
        distinct
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Vertical (column-written) problems
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerticalConfig {
    pub count: usize,
    pub op: Operator,
    pub digits_a: u32,
    pub digits_b: u32,
    pub enforce_non_negative_subtraction: bool,
    pub enforce_exact_division: bool,
    /// Nudge the subtrahend's ones digit up by one when a draw would not borrow.
    /// Never breaks the non-negative guarantee or the digit width of `b`.
    pub favor_borrow: bool,
}

impl Default for VerticalConfig {
    fn default() -> Self {
        Self {
            count: 24,
            op: Operator::Add,
            digits_a: 3,
            digits_b: 2,
            enforce_non_negative_subtraction: true,
            enforce_exact_division: true,
            favor_borrow: true,
        }
    }
}

impl VerticalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_count(self.count)?;
        validate_digits("digits_a", self.digits_a)?;
        validate_digits("digits_b", self.digits_b)?;
        Ok(())
    }
}

/// Inclusive operand range for a digit width: `[10^(digits-1), 10^digits - 1]`.
/// One digit yields `[1, 9]`.
pub fn digit_range(digits: u32) -> (u32, u32) {
    let low = 10u32.pow(digits.saturating_sub(1));
    let high = 10u32.pow(digits) - 1;
    (low, high)
}

// ────────────────────────────────────────────────────────────────────────────
// Shared checks
// ────────────────────────────────────────────────────────────────────────────

pub fn validate_count(count: usize) -> Result<(), ConfigError> {
    if count == 0 {
        return Err(ConfigError::ZeroCount);
    }
    Ok(())
}

/// Service-level cap, applied on top of the per-config checks.
pub fn validate_count_cap(count: usize, max: usize) -> Result<(), ConfigError> {
    if count > max {
        return Err(ConfigError::CountTooLarge { count, max });
    }
    Ok(())
}

fn validate_digits(field: &'static str, digits: u32) -> Result<(), ConfigError> {
    if digits == 0 || digits > MAX_DIGITS {
        return Err(ConfigError::DigitsOutOfRange {
            field,
            digits,
            max: MAX_DIGITS,
        });
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(OralConfig::default().validate().is_ok());
        assert!(VerticalConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let config = OralConfig {
            min: 50,
            max: 10,
            ..OralConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRange { min: 50, max: 10 })
        );
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let config = OralConfig {
            count: 0,
            ..OralConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCount));
    }

    #[test]
    fn test_empty_operator_set_is_rejected() {
        let config = OralConfig {
            operators: vec![],
            ..OralConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoOperators));
    }

    #[test]
    fn test_digit_width_bounds() {
        let too_wide = VerticalConfig {
            digits_a: 10,
            ..VerticalConfig::default()
        };
        assert!(matches!(
            too_wide.validate(),
            Err(ConfigError::DigitsOutOfRange { field: "digits_a", .. })
        ));

        let zero = VerticalConfig {
            digits_b: 0,
            ..VerticalConfig::default()
        };
        assert!(matches!(
            zero.validate(),
            Err(ConfigError::DigitsOutOfRange { field: "digits_b", .. })
        ));
    }

    #[test]
    fn test_digit_range() {
        assert_eq!(digit_range(1), (1, 9));
        assert_eq!(digit_range(2), (10, 99));
        assert_eq!(digit_range(3), (100, 999));
        assert_eq!(digit_range(MAX_DIGITS), (100_000_000, 999_999_999));
    }

    #[test]
    fn test_count_cap() {
        assert!(validate_count_cap(500, 500).is_ok());
        assert_eq!(
            validate_count_cap(501, 500),
            Err(ConfigError::CountTooLarge { count: 501, max: 500 })
        );
    }

    #[test]
    fn test_distinct_operators_keeps_first_seen_order() {
        let config = OralConfig {
            operators: vec![Operator::Mul, Operator::Add, Operator::Mul],
            ..OralConfig::default()
        };
        assert_eq!(
            config.distinct_operators(),
            vec![Operator::Mul, Operator::Add]
        );
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: OralConfig = serde_json::from_str(r#"{ "count": 10, "max": 20 }"#).unwrap();
        assert_eq!(config.count, 10);
        assert_eq!(config.max, 20);
        assert_eq!(config.min, 0);
        assert_eq!(config.operators.len(), 4);
        assert!(config.enforce_exact_division);
    }
}
