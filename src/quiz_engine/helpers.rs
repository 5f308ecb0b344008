//! Shared building blocks for the per-operation generators.
//!
//! ## RNG ordering
//!
//! Addition and subtraction draw two integers first and only then roll for
//! the decimal branch (which redraws both operands). Division draws the
//! divisor factor before the quotient factor. Keep these orders stable:
//! seeded tests depend on the exact draw sequence.

use crate::quiz_engine::{
    models::{Operation, Question},
    operations::Operands,
    random::{random_int, random_tenths, roll_above, RandomSource},
};

/// Chance threshold for the one-decimal operand branch (30% of draws).
pub const DECIMAL_OPERAND_THRESHOLD: f64 = 0.7;

/// Per-operand bound for multiplication and division.
///
/// Large ranges shrink to `ceil(sqrt(range)) + 5` so products stay
/// mentally tractable; ranges up to 20 are used as-is.
pub fn multiplication_bound(range: u32) -> u32 {
    if range > 20 {
        (range as f64).sqrt().ceil() as u32 + 5
    } else {
        range
    }
}

/// Operand draw shared by addition and subtraction.
///
/// Two integers in `[1, range]`; with decimals enabled, a 30% roll replaces
/// both with one-decimal floats in `[0, range)`.
pub fn additive_operands<R: RandomSource + ?Sized>(
    rng: &mut R,
    range: u32,
    allow_decimals: bool,
) -> (f64, f64) {
    let mut a = random_int(rng, range) as f64;
    let mut b = random_int(rng, range) as f64;
    if allow_decimals && roll_above(rng, DECIMAL_OPERAND_THRESHOLD) {
        a = random_tenths(rng, range);
        b = random_tenths(rng, range);
    }
    (a, b)
}

/// Assemble an unanswered [`Question`].
pub fn question(id: String, operation: Operation, operands: Operands) -> Question {
    Question {
        id,
        operand1: operands.operand1,
        operand2: operands.operand2,
        operation,
        correct_answer: operands.answer,
        user_answer: None,
        is_correct: None,
    }
}
