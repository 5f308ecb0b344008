//! Difficulty presets and settings adjustments.
//!
//! Each [`Difficulty`] maps to exactly one preset through a total function;
//! the toggle/builder methods below are what a settings screen calls.

use tracing::debug;

use crate::quiz_engine::{
    error::{QuizError, Result},
    models::{Difficulty, Operation, Settings},
};

/// Lowest value offered by the range slider.
pub const RANGE_MIN: u32 = 10;
/// Highest value offered by the range slider.
pub const RANGE_MAX: u32 = 1000;
/// Slider granularity.
pub const RANGE_STEP: u32 = 10;

impl Settings {
    /// Preset generation parameters for a difficulty tier.
    pub fn preset(difficulty: Difficulty) -> Self {
        use Operation::*;
        let (operations, range, allow_negative, allow_decimals) = match difficulty {
            Difficulty::C => (vec![Add, Subtract], 10, false, false),
            Difficulty::B => (vec![Add, Subtract, Multiply], 20, false, false),
            Difficulty::A => (vec![Add, Subtract, Multiply, Divide], 50, true, false),
            Difficulty::S => (vec![Add, Subtract, Multiply, Divide], 100, true, true),
        };
        Settings { operations, range, allow_negative, allow_decimals, difficulty }
    }

    /// Preset for the rung above this one (used after a perfect round).
    pub fn next_level(&self) -> Self {
        Settings::preset(self.difficulty.next())
    }

    /// Add `op` if absent, remove it if present.
    ///
    /// Removing the last selected operation is refused and leaves the
    /// settings untouched; the return value says whether anything changed.
    pub fn toggle_operation(&mut self, op: Operation) -> bool {
        if let Some(pos) = self.operations.iter().position(|&o| o == op) {
            if self.operations.len() == 1 {
                debug!(%op, "refusing to deselect the last operation");
                return false;
            }
            self.operations.remove(pos);
        } else {
            self.operations.push(op);
        }
        true
    }

    /// Set the range, snapped to the slider's grid.
    pub fn with_range(mut self, range: u32) -> Self {
        let clamped = range.clamp(RANGE_MIN, RANGE_MAX);
        self.range = (clamped / RANGE_STEP) * RANGE_STEP;
        self
    }

    pub fn with_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    pub fn with_decimals(mut self, allow: bool) -> Self {
        self.allow_decimals = allow;
        self
    }

    /// Check the invariants the generator relies on.
    pub fn validate(&self) -> Result<()> {
        if self.operations.is_empty() {
            return Err(QuizError::EmptyOperations);
        }
        if self.range == 0 {
            return Err(QuizError::InvalidRange(self.range));
        }
        Ok(())
    }

    /// Deserialize settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::preset(Difficulty::C)
    }
}
