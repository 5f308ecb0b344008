use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, warn};

use crate::quiz_engine::{
    error::Result,
    helpers,
    models::{Operation, Question, QuizRequest, Settings},
    operations,
    random::{pick, round_to, salt, RandomSource},
};

/// Every quiz is exactly this many questions long.
pub const QUESTIONS_PER_QUIZ: usize = 10;

/// Build a question ID from operation prefix, index and a random salt,
/// e.g. `"MUL-3-0A1B2C"`.
fn make_question_id<R: RandomSource + ?Sized>(op: Operation, index: usize, rng: &mut R) -> String {
    format!("{}-{}-{:06X}", op.id_prefix(), index, salt(rng))
}

/// Seeded RNG when a seed is given, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Generate one question.
///
/// Pure apart from `rng`. Settings are assumed valid; an empty operation
/// list falls back to addition rather than failing.
pub fn generate<R: RandomSource + ?Sized>(settings: &Settings, index: usize, rng: &mut R) -> Question {
    let operation = match pick(rng, &settings.operations) {
        Some(&op) => op,
        None => {
            warn!("no operations selected, falling back to addition");
            Operation::Add
        }
    };

    let mut ops = match operation {
        Operation::Add      => operations::addition::generate(rng, settings),
        Operation::Subtract => operations::subtraction::generate(rng, settings),
        Operation::Multiply => operations::multiplication::generate(rng, settings),
        Operation::Divide   => operations::division::generate(rng, settings),
    };

    if settings.allow_decimals {
        ops.answer = round_to(ops.answer, 2);
    }

    let id = make_question_id(operation, index, rng);
    debug!(
        id = %id,
        a = ops.operand1,
        b = ops.operand2,
        op = %operation,
        answer = ops.answer,
        "generated question"
    );
    helpers::question(id, operation, ops)
}

/// Validate `settings` and generate a full quiz (indices `0..10`).
pub fn generate_batch<R: RandomSource + ?Sized>(settings: &Settings, rng: &mut R) -> Result<Vec<Question>> {
    settings.validate()?;
    Ok((0..QUESTIONS_PER_QUIZ)
        .map(|index| generate(settings, index, rng))
        .collect())
}

/// Entry point for callers that only hold a request: seeds the RNG and
/// generates the quiz.
pub fn generate_quiz(request: &QuizRequest) -> Result<Vec<Question>> {
    let mut rng = seeded_rng(request.rng_seed);
    generate_batch(&request.settings, &mut rng)
}
