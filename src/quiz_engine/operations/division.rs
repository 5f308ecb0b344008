use crate::quiz_engine::{
    helpers::multiplication_bound,
    models::Settings,
    operations::Operands,
    random::{random_int, roll_above, RandomSource},
};

/// Chance threshold for the halving exercise (20% of draws).
pub const HALVING_THRESHOLD: f64 = 0.8;
/// Largest dividend offered by the halving exercise.
pub const HALVING_MAX_DIVIDEND: u32 = 20;

/// Built backwards from a product so the quotient is always whole.
///
/// With decimals enabled a 20% roll replaces the problem with `n ÷ 2` for
/// `n` in `[1, 20]`, which may have a `.5` answer.
pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, settings: &Settings) -> Operands {
    let bound = multiplication_bound(settings.range);
    let divisor = random_int(rng, bound) as f64;
    let quotient = random_int(rng, bound) as f64;
    let mut ops = Operands {
        operand1: quotient * divisor,
        operand2: divisor,
        answer: quotient,
    };

    if settings.allow_decimals && roll_above(rng, HALVING_THRESHOLD) {
        let dividend = random_int(rng, HALVING_MAX_DIVIDEND) as f64;
        ops = Operands { operand1: dividend, operand2: 2.0, answer: dividend / 2.0 };
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::Difficulty;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn integer_division_is_always_clean() {
        let settings = Settings::preset(Difficulty::A);
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..500 {
            let ops = generate(&mut rng, &settings);
            assert_eq!(ops.operand1, ops.answer * ops.operand2);
            assert_eq!(ops.answer.fract(), 0.0);
        }
    }

    #[test]
    fn halving_branch_uses_divisor_two() {
        let settings = Settings::preset(Difficulty::S);
        let mut rng = StdRng::seed_from_u64(4);
        let halves: Vec<Operands> = (0..500)
            .map(|_| generate(&mut rng, &settings))
            .filter(|ops| ops.answer.fract() != 0.0)
            .collect();
        assert!(!halves.is_empty(), "500 draws never produced a fractional quotient");
        for ops in halves {
            assert_eq!(ops.operand2, 2.0);
            assert!(ops.operand1 >= 1.0 && ops.operand1 <= 20.0);
            assert_eq!(ops.answer, ops.operand1 / 2.0);
        }
    }
}
