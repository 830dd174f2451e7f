//! Routes a worksheet request to the right generator.
//!
//! A worksheet is either oral (mental arithmetic, many short problems) or vertical
//! (column-written). The practice type can swap the general generator for a drill,
//! but only drills that make sense for the selected mode.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ConfigError;
use crate::generation::arithmetic::Problem;
use crate::generation::config::{
    validate_count_cap, OralConfig, VerticalConfig, DEFAULT_MAX_FACTOR,
};
use crate::generation::drills::{
    multiplication_table, round_number_oral, two_digit_borrow_subtraction,
    two_digit_carry_addition,
};
use crate::generation::generator::{generate_oral, generate_vertical};
use crate::generation::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorksheetMode {
    #[default]
    Oral,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeType {
    #[default]
    Custom,
    MulTable,
    TwoDigitCarryAdd,
    TwoDigitBorrowSub,
    TensHundredsOral,
}

/// Everything needed to produce one worksheet's problem list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemRequest {
    pub mode: WorksheetMode,
    pub practice_type: PracticeType,
    pub oral: OralConfig,
    pub vertical: VerticalConfig,
    /// Largest factor for the multiplication-table drill.
    pub max_factor: Option<u32>,
}

impl ProblemRequest {
    /// Number of problems the selected mode will produce.
    pub fn count(&self) -> usize {
        match self.mode {
            WorksheetMode::Oral => self.oral.count,
            WorksheetMode::Vertical => self.vertical.count,
        }
    }
}

/// Generates the problem list for `request`.
///
/// Oral mode: `mul_table` and `tens_hundreds_oral` select a drill, anything else
/// uses the oral generator. Vertical mode: `two_digit_carry_add` and
/// `two_digit_borrow_sub` select a drill, anything else uses the vertical generator.
pub fn generate_problems<R: RandomSource + ?Sized>(
    request: &ProblemRequest,
    max_count: usize,
    rng: &mut R,
) -> Result<Vec<Problem>, ConfigError> {
    let count = request.count();
    validate_count_cap(count, max_count)?;

    let problems = match (request.mode, request.practice_type) {
        (WorksheetMode::Oral, PracticeType::MulTable) => multiplication_table(
            count,
            request.max_factor.unwrap_or(DEFAULT_MAX_FACTOR),
            rng,
        )?,
        (WorksheetMode::Oral, PracticeType::TensHundredsOral) => round_number_oral(count, rng)?,
        (WorksheetMode::Oral, _) => generate_oral(&request.oral, rng)?,
        (WorksheetMode::Vertical, PracticeType::TwoDigitCarryAdd) => {
            two_digit_carry_addition(count, rng)?
        }
        (WorksheetMode::Vertical, PracticeType::TwoDigitBorrowSub) => {
            two_digit_borrow_subtraction(count, rng)?
        }
        (WorksheetMode::Vertical, _) => generate_vertical(&request.vertical, rng)?,
    };

    info!(
        "Generated {} {:?} problems ({:?})",
        problems.len(),
        request.mode,
        request.practice_type
    );
    Ok(problems)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
