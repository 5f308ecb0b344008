//! Score classification and themed summary messages.

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    models::{FeedbackCategory, Mood},
    phrases::{closing_remarks, summary_fragments},
    random::{pick_phrase, RandomSource},
};

/// Composed end-of-quiz message plus the band it was drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub category: FeedbackCategory,
    pub mood: Mood,
    pub message: String,
}

/// Band a score by percentage: 100 perfect, 80+ great, 60+ good, else bad.
///
/// A zero `total` is classified as `Bad`.
pub fn classify(correct: usize, total: usize) -> FeedbackCategory {
    if total == 0 {
        return FeedbackCategory::Bad;
    }
    let percentage = correct as f64 / total as f64 * 100.0;
    if percentage >= 100.0 {
        FeedbackCategory::Perfect
    } else if percentage >= 80.0 {
        FeedbackCategory::Great
    } else if percentage >= 60.0 {
        FeedbackCategory::Good
    } else {
        FeedbackCategory::Bad
    }
}

/// Draw one opener, one body and one closer for `category`, each slot
/// independently, and join them with single spaces.
pub fn compose_message<R: RandomSource + ?Sized>(category: FeedbackCategory, rng: &mut R) -> String {
    let fragments = summary_fragments(category);
    let opener = pick_phrase(rng, fragments.openers);
    let body = pick_phrase(rng, fragments.bodies);
    let closer = pick_phrase(rng, fragments.closers);
    format!("{opener} {body} {closer}")
}

pub fn summarize<R: RandomSource + ?Sized>(correct: usize, total: usize, rng: &mut R) -> Summary {
    let category = classify(correct, total);
    Summary {
        category,
        mood: category.mood(),
        message: compose_message(category, rng),
    }
}

/// One long spoken remark for the results screen.
pub fn closing_remark<R: RandomSource + ?Sized>(category: FeedbackCategory, rng: &mut R) -> &'static str {
    pick_phrase(rng, closing_remarks(category))
}
