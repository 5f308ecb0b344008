//! Per-answer and end-of-quiz cues for the audio/speech collaborator.
//!
//! The engine never waits on playback: an [`Announcer`] receives a sound tag
//! and a phrase and returns immediately.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::quiz_engine::{
    explain::explain_error,
    models::{QuizResult, SoundEffect},
    phrases::{ENCOURAGEMENT, PRAISE},
    random::{pick_phrase, RandomSource},
    session::AnswerOutcome,
    summary::{closing_remark, summarize, Summary},
};

/// Audio / text-to-speech side of the presentation layer.
pub trait Announcer {
    fn play(&mut self, sound: SoundEffect);
    fn speak(&mut self, text: &str);
}

/// Drops every cue. Useful for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAnnouncer;

impl Announcer for SilentAnnouncer {
    fn play(&mut self, _sound: SoundEffect) {}
    fn speak(&mut self, _text: &str) {}
}

/// Logs every cue through `tracing` instead of playing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnnouncer;

impl Announcer for TracingAnnouncer {
    fn play(&mut self, sound: SoundEffect) {
        info!(%sound, "play");
    }

    fn speak(&mut self, text: &str) {
        info!(text, "speak");
    }
}

/// Everything the game screen shows or says after one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub sound: SoundEffect,
    pub phrase: String,
    /// Hint for wrong answers; `None` when the answer was right.
    pub explanation: Option<String>,
}

pub fn answer_feedback<R: RandomSource + ?Sized>(outcome: &AnswerOutcome, rng: &mut R) -> AnswerFeedback {
    if outcome.is_correct {
        AnswerFeedback {
            sound: SoundEffect::Correct,
            phrase: pick_phrase(rng, PRAISE).to_string(),
            explanation: None,
        }
    } else {
        let phrase = pick_phrase(rng, ENCOURAGEMENT).to_string();
        AnswerFeedback {
            sound: SoundEffect::Wrong,
            phrase,
            explanation: Some(explain_error(&outcome.question, rng)),
        }
    }
}

/// Build the feedback for `outcome` and hand it to `announcer`.
pub fn announce_answer<A, R>(announcer: &mut A, outcome: &AnswerOutcome, rng: &mut R) -> AnswerFeedback
where
    A: Announcer + ?Sized,
    R: RandomSource + ?Sized,
{
    let feedback = answer_feedback(outcome, rng);
    announcer.play(feedback.sound);
    announcer.speak(&feedback.phrase);
    feedback
}

/// Fanfare, then one long spoken remark for the result's band.
///
/// Returns the on-screen summary, composed independently of the spoken line.
pub fn announce_result<A, R>(announcer: &mut A, result: &QuizResult, rng: &mut R) -> Summary
where
    A: Announcer + ?Sized,
    R: RandomSource + ?Sized,
{
    let summary = summarize(result.correct_count, result.total_questions, rng);
    announcer.play(SoundEffect::Win);
    announcer.speak(closing_remark(summary.category, rng));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::{Operation, Question};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct Recorder {
        sounds: Vec<SoundEffect>,
        lines: Vec<String>,
    }

    impl Announcer for Recorder {
        fn play(&mut self, sound: SoundEffect) {
            self.sounds.push(sound);
        }
        fn speak(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }
    }

    fn outcome(is_correct: bool) -> AnswerOutcome {
        AnswerOutcome {
            index: 0,
            is_correct,
            question: Question {
                id: "ADD-0-000000".into(),
                operand1: 3.0,
                operand2: 4.0,
                operation: Operation::Add,
                correct_answer: 7.0,
                user_answer: Some(if is_correct { 7.0 } else { 8.0 }),
                is_correct: Some(is_correct),
            },
        }
    }

    #[test]
    fn correct_answers_get_praise_and_no_hint() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut rec = Recorder::default();
        let fb = announce_answer(&mut rec, &outcome(true), &mut rng);
        assert_eq!(fb.sound, SoundEffect::Correct);
        assert!(PRAISE.contains(&fb.phrase.as_str()));
        assert!(fb.explanation.is_none());
        assert_eq!(rec.sounds, vec![SoundEffect::Correct]);
        assert_eq!(rec.lines, vec![fb.phrase]);
    }

    #[test]
    fn wrong_answers_get_encouragement_and_a_hint() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut rec = Recorder::default();
        let fb = announce_answer(&mut rec, &outcome(false), &mut rng);
        assert_eq!(fb.sound, SoundEffect::Wrong);
        assert!(ENCOURAGEMENT.contains(&fb.phrase.as_str()));
        let hint = fb.explanation.expect("wrong answer must carry a hint");
        assert!(hint.starts_with("正确答案是 7。"));
        assert_eq!(rec.sounds, vec![SoundEffect::Wrong]);
    }

    #[test]
    fn silent_announcer_accepts_everything() {
        let mut rng = StdRng::seed_from_u64(3);
        let fb = announce_answer(&mut SilentAnnouncer, &outcome(true), &mut rng);
        assert_eq!(fb.sound, SoundEffect::Correct);
    }
}
