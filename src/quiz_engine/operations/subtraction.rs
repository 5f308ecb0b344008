use crate::quiz_engine::{
    helpers::additive_operands,
    models::Settings,
    operations::Operands,
    random::RandomSource,
};

/// Same draw as addition; without negatives the larger operand goes first.
pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, settings: &Settings) -> Operands {
    let (mut operand1, mut operand2) =
        additive_operands(rng, settings.range, settings.allow_decimals);
    if !settings.allow_negative && operand1 < operand2 {
        std::mem::swap(&mut operand1, &mut operand2);
    }
    Operands { operand1, operand2, answer: operand1 - operand2 }
}
