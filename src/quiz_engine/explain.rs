use crate::quiz_engine::{
    models::{format_number, Operation, Question},
    phrases::{tips, EQUAL_SUBTRACTION, MULTIPLY_BY_ZERO, ZERO_DIVIDED},
    random::{pick_phrase, RandomSource},
};

/// One hint for a wrongly-answered question.
///
/// Zero products, zero dividends and equal-operand subtraction get a fixed
/// rule; everything else gets the correct answer followed by a random tip
/// for the operation.
pub fn explain_error<R: RandomSource + ?Sized>(question: &Question, rng: &mut R) -> String {
    let (a, b) = (question.operand1, question.operand2);
    match question.operation {
        Operation::Multiply if a == 0.0 || b == 0.0 => return MULTIPLY_BY_ZERO.to_string(),
        Operation::Divide if a == 0.0 => return ZERO_DIVIDED.to_string(),
        Operation::Subtract if a == b => return EQUAL_SUBTRACTION.to_string(),
        _ => {}
    }

    let tip = pick_phrase(rng, tips(question.operation));
    format!("正确答案是 {}。{}", format_number(question.correct_answer), tip)
}
