//! Keypad answer buffer.
//!
//! The on-screen keypad offers `0-9`, `.` and `-`. The buffer enforces the
//! keypad rules so the session only ever sees plausible numbers, but the
//! session still validates whatever it is given.

use crate::quiz_engine::{error::Result, session::parse_answer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Point,
    Minus,
    Backspace,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerInput {
    buffer: String,
}

impl AnswerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one key press. Returns `false` when the key was ignored.
    pub fn press(&mut self, key: Key) -> bool {
        match key {
            Key::Digit(d) if d <= 9 => {
                self.buffer.push(char::from(b'0' + d));
                true
            }
            Key::Digit(_) => false,
            Key::Point => {
                if self.buffer.contains('.') {
                    return false;
                }
                self.buffer.push('.');
                true
            }
            // Only as a leading sign.
            Key::Minus => {
                if !self.buffer.is_empty() {
                    return false;
                }
                self.buffer.push('-');
                true
            }
            Key::Backspace => self.buffer.pop().is_some(),
        }
    }

    /// Map a typed character onto a keypad key.
    pub fn press_char(&mut self, c: char) -> bool {
        let key = match c {
            '0'..='9' => Key::Digit(c as u8 - b'0'),
            '.' => Key::Point,
            '-' => Key::Minus,
            '\u{8}' | '\u{7f}' => Key::Backspace,
            _ => return false,
        };
        self.press(key)
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Submittable only when the buffer parses, so `""`, `"-"`, `"."` and
    /// `"-."` are all held back.
    pub fn is_submittable(&self) -> bool {
        self.value().is_ok()
    }

    pub fn value(&self) -> Result<f64> {
        parse_answer(&self.buffer)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> AnswerInput {
        let mut input = AnswerInput::new();
        for c in s.chars() {
            input.press_char(c);
        }
        input
    }

    #[test]
    fn only_one_decimal_point() {
        assert_eq!(typed("1.2.5").as_str(), "1.25");
    }

    #[test]
    fn minus_only_at_the_start() {
        assert_eq!(typed("-12").as_str(), "-12");
        assert_eq!(typed("1-2").as_str(), "12");
        assert_eq!(typed("--3").as_str(), "-3");
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut input = typed("42");
        assert!(input.press(Key::Backspace));
        assert_eq!(input.as_str(), "4");
        assert!(input.press(Key::Backspace));
        assert!(!input.press(Key::Backspace));
        assert!(input.is_empty());
    }

    #[test]
    fn bare_sign_or_point_is_not_submittable() {
        assert!(!typed("").is_submittable());
        assert!(!typed("-").is_submittable());
        assert!(!typed(".").is_submittable());
        assert!(!typed("-.").is_submittable());
        assert!(typed("5.").is_submittable());
        assert!(typed("-.5").is_submittable());
        assert!(typed("0").is_submittable());
    }

    #[test]
    fn value_parses_the_buffer() {
        assert_eq!(typed("-2.5").value().unwrap(), -2.5);
        assert_eq!(typed(".5").value().unwrap(), 0.5);
        assert!(typed("-").value().is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut input = AnswerInput::new();
        assert!(!input.press_char('x'));
        assert!(!input.press(Key::Digit(12)));
        assert!(input.is_empty());
    }
}
