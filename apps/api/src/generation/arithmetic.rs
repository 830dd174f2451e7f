//! Arithmetic core — the four worksheet operators and the `Problem` value type.
//!
//! Division follows integer floor semantics. A zero divisor is evaluated as if it
//! were one so that `compute` stays total over its domain; generators never emit a
//! zero divisor in the first place.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Operator
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// The glyph printed on a worksheet (`×` and `÷`, not `*` and `/`).
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '×',
            Operator::Div => '÷',
        }
    }
}

/// Evaluates `a op b`.
///
/// Evaluated in `i128`, which holds every `u32` product and difference exactly.
/// `Sub` is not clamped: callers that need a non-negative result must order the
/// operands themselves. `Div` is `floor(a / max(1, b))`.
pub fn compute(op: Operator, a: u32, b: u32) -> i128 {
    let (a, b) = (i128::from(a), i128::from(b));
    match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => a / b.max(1),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Problem
// ────────────────────────────────────────────────────────────────────────────

/// One practice problem. `ans` is always `compute(op, a, b)`; the fields are private
/// so a problem cannot be edited into an inconsistent state after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Problem {
    a: u32,
    b: u32,
    op: Operator,
    ans: i128,
}

impl Problem {
    pub fn new(op: Operator, a: u32, b: u32) -> Self {
        Self {
            a,
            b,
            op,
            ans: compute(op, a, b),
        }
    }

    pub fn a(&self) -> u32 {
        self.a
    }

    pub fn b(&self) -> u32 {
        self.b
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn ans(&self) -> i128 {
        self.ans
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} =", self.a, self.op.symbol(), self.b)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
