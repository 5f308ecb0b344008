//! Core quiz engine — question generation, sessions, scoring and feedback.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: operations, difficulty, settings, questions, results |
//! | `error`      | `QuizError` and the crate `Result` alias |
//! | `random`     | Injected `RandomSource` and uniform draw helpers |
//! | `settings`   | Difficulty presets, successor ladder, operation toggling |
//! | `helpers`    | Operand draws and builders shared by the operation generators |
//! | `operations` | One generator per arithmetic operation |
//! | `generator`  | `generate()` for one question, `generate_quiz()` for a request |
//! | `session`    | Ten-question state machine: submit, advance, finish |
//! | `summary`    | Score bands and composed summary messages |
//! | `explain`    | Hints for wrongly-answered questions |
//! | `feedback`   | Per-answer cues and the `Announcer` collaborator |
//! | `input`      | Keypad answer buffer |
//! | `assets`     | Lazily-loaded image list cache |
//! | `phrases`    | Static phrase and tip tables |

pub mod assets;
pub mod error;
pub mod explain;
pub mod feedback;
pub mod generator;
pub mod helpers;
pub mod input;
pub mod models;
pub mod operations;
pub mod phrases;
pub mod random;
pub mod session;
pub mod settings;
pub mod summary;

// Re-export the public API surface so callers can use
// `quiz_engine::generate` without reaching into sub-modules.
pub use error::{QuizError, Result};
pub use explain::explain_error;
pub use feedback::{announce_answer, announce_result, AnswerFeedback, Announcer, SilentAnnouncer, TracingAnnouncer};
pub use generator::{generate, generate_batch, generate_quiz, seeded_rng, QUESTIONS_PER_QUIZ};
pub use input::{AnswerInput, Key};
pub use models::{
    Difficulty, FeedbackCategory, Mood, Operation, Question, QuizRequest, QuizResult, Settings,
    SoundEffect,
};
pub use random::RandomSource;
pub use session::{finish, AnswerOutcome, QuizSession, SessionState};
pub use summary::{classify, compose_message, summarize, Summary};
