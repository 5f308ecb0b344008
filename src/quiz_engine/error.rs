use thiserror::Error;

/// Everything that can go wrong in the quiz engine.
///
/// Generation itself never fails for valid settings; these variants cover
/// bad settings, misuse of the session state machine, and asset list loading.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("at least one operation must be selected")]
    EmptyOperations,

    #[error("numeric range must be at least 1 (got {0})")]
    InvalidRange(u32),

    #[error("'{0}' is not a number")]
    UnparsableAnswer(String),

    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },

    #[error("expected an answer for question {expected}, got question {got}")]
    OutOfOrder { expected: usize, got: usize },

    #[error("all questions have already been answered")]
    SessionComplete,

    #[error("only {answered} of {total} questions answered")]
    Unfinished { answered: usize, total: usize },

    #[error("failed to read asset list: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed asset list: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
