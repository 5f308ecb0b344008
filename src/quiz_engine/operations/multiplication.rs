use crate::quiz_engine::{
    helpers::multiplication_bound,
    models::Settings,
    operations::Operands,
    random::{random_int, RandomSource},
};

pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, settings: &Settings) -> Operands {
    let bound = multiplication_bound(settings.range);
    let operand1 = random_int(rng, bound) as f64;
    let operand2 = random_int(rng, bound) as f64;
    Operands { operand1, operand2, answer: operand1 * operand2 }
}
