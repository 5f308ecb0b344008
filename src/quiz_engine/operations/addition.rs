use crate::quiz_engine::{
    helpers::additive_operands,
    models::Settings,
    operations::Operands,
    random::RandomSource,
};

pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, settings: &Settings) -> Operands {
    let (operand1, operand2) = additive_operands(rng, settings.range, settings.allow_decimals);
    Operands { operand1, operand2, answer: operand1 + operand2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::Difficulty;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn integer_operands_stay_in_range() {
        let settings = Settings::preset(Difficulty::C);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..300 {
            let ops = generate(&mut rng, &settings);
            assert!((1.0..=10.0).contains(&ops.operand1));
            assert!((1.0..=10.0).contains(&ops.operand2));
            assert_eq!(ops.operand1.fract(), 0.0);
            assert_eq!(ops.answer, ops.operand1 + ops.operand2);
        }
    }

    #[test]
    fn decimal_branch_appears_when_enabled() {
        let settings = Settings::preset(Difficulty::C).with_decimals(true);
        let mut rng = StdRng::seed_from_u64(11);
        let saw_fraction = (0..400)
            .map(|_| generate(&mut rng, &settings))
            .any(|ops| ops.operand1.fract() != 0.0 || ops.operand2.fract() != 0.0);
        assert!(saw_fraction, "400 draws never took the one-decimal branch");
    }
}
