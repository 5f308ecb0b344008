//! # ultra_math
//!
//! An offline, deterministic arithmetic quiz engine for children, themed
//! around the Ultra hero of the Land of Light.
//!
//! A player picks a difficulty tier (C, B, A, S) or hand-tunes the settings,
//! answers ten generated problems, and gets a themed summary with spoken
//! feedback. This crate is the engine: the screens, the synthesiser and the
//! speech voice sit behind the presentation layer and the [`Announcer`] trait.
//!
//! ## How it works
//!
//! 1. Build [`Settings`] from a difficulty preset (optionally toggle
//!    operations, change the range, allow negatives or decimals).
//! 2. Start a [`QuizSession`]: all ten questions are generated up front from
//!    an injected random source, so a seed reproduces the whole quiz.
//! 3. Feed each answer to [`QuizSession::submit_answer`]; answers within
//!    `0.01` of the true value count as correct.
//! 4. [`QuizSession::finish`] yields a [`QuizResult`]; [`summarize`] bands it
//!    (perfect / great / good / bad) and composes a message.
//!
//! ## Quick start
//!
//! ```rust
//! use ultra_math::{seeded_rng, Difficulty, FeedbackCategory, QuizSession, Settings};
//!
//! let mut rng = seeded_rng(Some(42));
//! let mut session = QuizSession::new(Settings::preset(Difficulty::C), &mut rng).unwrap();
//!
//! while let Some(q) = session.current_question() {
//!     let index = session.current_index();
//!     let answer = q.correct_answer.to_string();
//!     session.submit_answer(index, &answer).unwrap();
//! }
//!
//! let result = session.finish().unwrap();
//! assert_eq!(result.correct_count, 10);
//! assert_eq!(result.category, FeedbackCategory::Perfect);
//! ```

pub mod quiz_engine;
pub mod report_adapter;

// Convenience re-exports so callers can use `ultra_math::generate`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    announce_answer, announce_result, classify, compose_message, explain_error, finish, generate,
    generate_batch, generate_quiz, seeded_rng, summarize, AnswerFeedback, AnswerInput,
    AnswerOutcome, Announcer, Difficulty, FeedbackCategory, Key, Mood, Operation, Question,
    QuizError, QuizRequest, QuizResult, QuizSession, RandomSource, SessionState, Settings,
    SilentAnnouncer, SoundEffect, Summary, TracingAnnouncer, QUESTIONS_PER_QUIZ,
};
pub use report_adapter::to_result_report;
