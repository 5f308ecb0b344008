use serde_json::{json, Value};
use crate::quiz_engine::{
    models::{format_number, Question, QuizResult},
    summary::Summary,
};

/// Wrong-answer row for the results screen.
fn wrong_entry(q: &Question) -> Value {
    json!({
        "id": q.id,
        "expression": q.expression(),
        "operation": q.operation.symbol(),
        "user_answer": q.user_answer.map(format_number),
        "correct_answer": format_number(q.correct_answer),
    })
}

/// Per-question progress dot: `"correct"`, `"wrong"` or `"pending"`.
fn progress_state(q: &Question) -> &'static str {
    match q.is_correct {
        Some(true)  => "correct",
        Some(false) => "wrong",
        None        => "pending",
    }
}

/// Map a finished quiz and its summary to the JSON document the client
/// renders on the results screen.
pub fn to_result_report(result: &QuizResult, summary: &Summary) -> Value {
    let wrong: Vec<Value> = result.wrong_questions().map(wrong_entry).collect();
    let progress: Vec<&str> = result.questions.iter().map(progress_state).collect();

    json!({
        "report_type": "QuizResult",
        "score": {
            "correct": result.correct_count,
            "total": result.total_questions,
            "percentage": result.percentage(),
            "stars": result.stars(),
            "perfect": result.is_perfect(),
        },
        "feedback": {
            "category": summary.category.to_string(),
            "mood": summary.mood.to_string(),
            "message": summary.message,
        },
        "progress": progress,
        "wrong_questions": wrong,
    })
}
