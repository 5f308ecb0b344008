//! One generator per arithmetic operation.
//!
//! Every module exposes the same signature:
//!
//! ```ignore
//! pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, settings: &Settings) -> Operands
//! ```
//!
//! `generator.rs` picks the operation and dispatches here.

pub mod addition;
pub mod division;
pub mod multiplication;
pub mod subtraction;

/// Raw output of an operation generator, before rounding and identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub operand1: f64,
    pub operand2: f64,
    pub answer: f64,
}
