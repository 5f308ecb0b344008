//! Ten-question session state machine.
//!
//! Questions are generated up front. Each one moves from unanswered to
//! answered exactly once, strictly in order; the session is complete when
//! the last one is answered, and only then can it be finished into an
//! immutable [`QuizResult`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::quiz_engine::{
    error::{QuizError, Result},
    generator::{generate_batch, seeded_rng, QUESTIONS_PER_QUIZ},
    models::{Question, QuizRequest, QuizResult, Settings},
    random::RandomSource,
    summary::classify,
};

/// Answers within this distance of the true value count as correct.
pub const ANSWER_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the answer to question `n` (zero-based).
    Active(usize),
    Complete,
}

/// What a single submission produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub index: usize,
    pub is_correct: bool,
    /// The question after `user_answer` / `is_correct` were recorded.
    pub question: Question,
}

/// Parse raw keypad text into a finite number.
pub fn parse_answer(raw: &str) -> Result<f64> {
    let unparsable = || QuizError::UnparsableAnswer(raw.to_string());
    let value: f64 = raw.trim().parse().map_err(|_| unparsable())?;
    if !value.is_finite() {
        return Err(unparsable());
    }
    Ok(value)
}

/// Tolerant comparison that absorbs rounding from decimal questions.
pub fn is_answer_correct(given: f64, expected: f64) -> bool {
    (given - expected).abs() < ANSWER_TOLERANCE
}

pub struct QuizSession {
    settings: Settings,
    questions: Vec<Question>,
    current: usize,
}

impl QuizSession {
    /// Generate all ten questions from `settings`.
    pub fn new<R: RandomSource + ?Sized>(settings: Settings, rng: &mut R) -> Result<Self> {
        let questions = generate_batch(&settings, rng)?;
        debug!(difficulty = %settings.difficulty, "session started");
        Ok(QuizSession { settings, questions, current: 0 })
    }

    pub fn from_request(request: &QuizRequest) -> Result<Self> {
        let mut rng = seeded_rng(request.rng_seed);
        QuizSession::new(request.settings.clone(), &mut rng)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    pub fn state(&self) -> SessionState {
        if self.current >= self.questions.len() {
            SessionState::Complete
        } else {
            SessionState::Active(self.current)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == SessionState::Complete
    }

    /// Record the answer to question `index` and advance.
    ///
    /// Only the current question accepts an answer. Unparsable input leaves
    /// the session exactly as it was.
    pub fn submit_answer(&mut self, index: usize, raw: &str) -> Result<AnswerOutcome> {
        if self.is_complete() {
            return Err(QuizError::SessionComplete);
        }
        if index < self.current {
            return Err(QuizError::AlreadyAnswered { index });
        }
        if index != self.current {
            return Err(QuizError::OutOfOrder { expected: self.current, got: index });
        }

        let value = parse_answer(raw)?;
        let question = &mut self.questions[index];
        let is_correct = is_answer_correct(value, question.correct_answer);
        question.user_answer = Some(value);
        question.is_correct = Some(is_correct);
        let question = question.clone();

        self.current += 1;
        debug!(index, value, is_correct, "answer recorded");
        Ok(AnswerOutcome { index, is_correct, question })
    }

    /// Build the result. Fails until every question has been answered,
    /// leaving the session playable.
    pub fn finish(&self) -> Result<QuizResult> {
        if !self.is_complete() {
            return Err(QuizError::Unfinished {
                answered: self.answered_count(),
                total: QUESTIONS_PER_QUIZ,
            });
        }
        finish(self.questions.clone())
    }
}

/// Aggregate ten answered questions into a [`QuizResult`].
pub fn finish(questions: Vec<Question>) -> Result<QuizResult> {
    let answered = questions.iter().filter(|q| q.is_answered()).count();
    if questions.len() != QUESTIONS_PER_QUIZ || answered != questions.len() {
        return Err(QuizError::Unfinished { answered, total: QUESTIONS_PER_QUIZ });
    }

    let correct_count = questions.iter().filter(|q| q.is_correct == Some(true)).count();
    let category = classify(correct_count, questions.len());
    info!(correct_count, total = questions.len(), %category, "quiz finished");

    Ok(QuizResult {
        total_questions: questions.len(),
        correct_count,
        questions,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::{format_number, Difficulty, FeedbackCategory, Operation};

    fn session(seed: u64) -> QuizSession {
        let settings = Settings::preset(Difficulty::C);
        QuizSession::new(settings, &mut seeded_rng(Some(seed))).unwrap()
    }

    fn answer_of(s: &QuizSession, i: usize) -> String {
        format_number(s.questions()[i].correct_answer)
    }

    #[test]
    fn parse_rejects_non_numbers() {
        for raw in ["", "-", ".", "abc", "NaN", "inf", "1.2.3"] {
            assert!(
                matches!(parse_answer(raw), Err(QuizError::UnparsableAnswer(_))),
                "{raw:?} should not parse"
            );
        }
        assert_eq!(parse_answer("-3.5").unwrap(), -3.5);
        assert_eq!(parse_answer("12").unwrap(), 12.0);
    }

    #[test]
    fn tolerance_is_strictly_below_one_hundredth() {
        assert!(is_answer_correct(4.999, 5.0));
        assert!(is_answer_correct(5.005, 5.0));
        assert!(!is_answer_correct(4.98, 5.0));
        assert!(!is_answer_correct(5.02, 5.0));
    }

    #[test]
    fn session_advances_one_question_per_answer() {
        let mut s = session(1);
        assert_eq!(s.state(), SessionState::Active(0));
        for i in 0..QUESTIONS_PER_QUIZ {
            let raw = answer_of(&s, i);
            let outcome = s.submit_answer(i, &raw).unwrap();
            assert!(outcome.is_correct);
            assert_eq!(outcome.question.user_answer, Some(s.questions()[i].correct_answer));
        }
        assert_eq!(s.state(), SessionState::Complete);
        assert!(s.current_question().is_none());
    }

    #[test]
    fn unparsable_input_is_a_no_op() {
        let mut s = session(2);
        let before = s.questions().to_vec();
        assert!(matches!(s.submit_answer(0, "-"), Err(QuizError::UnparsableAnswer(_))));
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.questions(), &before[..]);
    }

    #[test]
    fn resubmission_and_skipping_are_rejected() {
        let mut s = session(3);
        s.submit_answer(0, "999").unwrap();
        assert!(matches!(s.submit_answer(0, "1"), Err(QuizError::AlreadyAnswered { index: 0 })));
        assert!(matches!(
            s.submit_answer(5, "1"),
            Err(QuizError::OutOfOrder { expected: 1, got: 5 })
        ));
        assert_eq!(s.questions()[0].user_answer, Some(999.0));
        assert_eq!(s.questions()[0].is_correct, Some(false));
    }

    #[test]
    fn submitting_after_completion_fails() {
        let mut s = session(4);
        for i in 0..QUESTIONS_PER_QUIZ {
            s.submit_answer(i, "0").unwrap();
        }
        assert!(matches!(s.submit_answer(10, "1"), Err(QuizError::SessionComplete)));
    }

    #[test]
    fn finishing_early_fails_and_keeps_the_session() {
        let mut s = session(5);
        s.submit_answer(0, "1").unwrap();
        assert!(matches!(
            s.finish(),
            Err(QuizError::Unfinished { answered: 1, total: 10 })
        ));
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.questions()[0].user_answer, Some(1.0));

        for i in 1..QUESTIONS_PER_QUIZ {
            let raw = answer_of(&s, i);
            s.submit_answer(i, &raw).unwrap();
        }
        let result = s.finish().unwrap();
        assert_eq!(result.total_questions, QUESTIONS_PER_QUIZ);
        assert_eq!(result.questions[0].user_answer, Some(1.0));
    }

    #[test]
    fn finish_counts_correct_answers() {
        let mut s = session(6);
        for i in 0..QUESTIONS_PER_QUIZ {
            let raw = if i < 8 { answer_of(&s, i) } else { "-1".to_string() };
            s.submit_answer(i, &raw).unwrap();
        }
        let result = s.finish().unwrap();
        assert_eq!(result.correct_count, 8);
        assert_eq!(result.category, FeedbackCategory::Great);
        assert_eq!(result.wrong_questions().count(), 2);
        assert_eq!(result.stars(), 2);
    }

    #[test]
    fn free_finish_rejects_short_lists() {
        let q = Question {
            id: "ADD-0-000000".into(),
            operand1: 1.0,
            operand2: 1.0,
            operation: Operation::Add,
            correct_answer: 2.0,
            user_answer: Some(2.0),
            is_correct: Some(true),
        };
        assert!(matches!(
            finish(vec![q]),
            Err(QuizError::Unfinished { answered: 1, total: 10 })
        ));
    }
}
