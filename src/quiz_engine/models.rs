use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Operations and difficulty ladder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All four operations in keypad order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add      => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide   => "÷",
        }
    }

    /// Prefix used in question identifiers.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Operation::Add      => "ADD",
            Operation::Subtract => "SUB",
            Operation::Multiply => "MUL",
            Operation::Divide   => "DIV",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Four-tier ladder, C (beginner) up to S (ultra).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    C,
    B,
    A,
    S,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [Difficulty::C, Difficulty::B, Difficulty::A, Difficulty::S];

    /// The next rung of the ladder. `S` maps to itself.
    pub fn next(self) -> Difficulty {
        match self {
            Difficulty::C => Difficulty::B,
            Difficulty::B => Difficulty::A,
            Difficulty::A => Difficulty::S,
            Difficulty::S => Difficulty::S,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::C => "Beginner",
            Difficulty::B => "Intermediate",
            Difficulty::A => "Advanced",
            Difficulty::S => "Ultra",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::C => "C",
            Difficulty::B => "B",
            Difficulty::A => "A",
            Difficulty::S => "S",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Generation parameters for one quiz.
///
/// `operations` is never empty once built through [`Settings::preset`] and the
/// toggle methods in `settings.rs`; hand-built values are checked by
/// [`Settings::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub operations: Vec<Operation>,
    pub range: u32,
    pub allow_negative: bool,
    pub allow_decimals: bool,
    pub difficulty: Difficulty,
}

/// Settings plus an optional seed; `None` seeds from OS entropy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub settings: Settings,
    pub rng_seed: Option<u64>,
}

impl QuizRequest {
    /// Preset settings for `difficulty`, unseeded.
    pub fn new(difficulty: Difficulty) -> Self {
        QuizRequest { settings: Settings::preset(difficulty), rng_seed: None }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

// ---------------------------------------------------------------------------
// Questions and results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub operand1: f64,
    pub operand2: f64,
    pub operation: Operation,
    pub correct_answer: f64,
    pub user_answer: Option<f64>,
    pub is_correct: Option<bool>,
}

impl Question {
    pub fn is_answered(&self) -> bool {
        self.is_correct.is_some()
    }

    /// `"7 × 8"` style rendering of the problem.
    pub fn expression(&self) -> String {
        format!(
            "{} {} {}",
            format_number(self.operand1),
            self.operation,
            format_number(self.operand2)
        )
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = ?", self.expression())
    }
}

/// Score band used to pick summary phrases and the hero's mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackCategory {
    Perfect,
    Great,
    Good,
    Bad,
}

impl FeedbackCategory {
    pub fn mood(self) -> Mood {
        match self {
            FeedbackCategory::Perfect => Mood::Happy,
            FeedbackCategory::Great   => Mood::Proud,
            FeedbackCategory::Good    => Mood::Encouraging,
            FeedbackCategory::Bad     => Mood::Sad,
        }
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackCategory::Perfect => write!(f, "perfect"),
            FeedbackCategory::Great   => write!(f, "great"),
            FeedbackCategory::Good    => write!(f, "good"),
            FeedbackCategory::Bad     => write!(f, "bad"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Proud,
    Encouraging,
    Sad,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mood::Happy       => write!(f, "happy"),
            Mood::Proud       => write!(f, "proud"),
            Mood::Encouraging => write!(f, "encouraging"),
            Mood::Sad         => write!(f, "sad"),
        }
    }
}

/// Sound cue tags understood by the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundEffect {
    Correct,
    Wrong,
    Click,
    Win,
    Start,
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundEffect::Correct => write!(f, "correct"),
            SoundEffect::Wrong   => write!(f, "wrong"),
            SoundEffect::Click   => write!(f, "click"),
            SoundEffect::Win     => write!(f, "win"),
            SoundEffect::Start   => write!(f, "start"),
        }
    }
}

/// Immutable outcome of a finished ten-question session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub total_questions: usize,
    pub correct_count: usize,
    pub questions: Vec<Question>,
    pub category: FeedbackCategory,
}

impl QuizResult {
    pub fn percentage(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.correct_count as f64 / self.total_questions as f64 * 100.0
    }

    pub fn is_perfect(&self) -> bool {
        self.correct_count == self.total_questions
    }

    /// Zero to three stars, one per full third of the score.
    pub fn stars(&self) -> u8 {
        ((self.percentage() / 100.0) * 3.0).floor() as u8
    }

    pub fn wrong_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.is_correct != Some(true))
    }
}

/// Render an operand or answer without a trailing `.0` for whole numbers.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
