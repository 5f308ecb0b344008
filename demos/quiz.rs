//! Terminal quiz driving the full engine.
//!
//! Run with: `cargo run --example quiz -- [C|B|A|S] [seed]`
//!
//! This example shows how `ultra_math` works end to end:
//!
//! 1. **Settings** — a difficulty preset is loaded (default `C`).
//! 2. **Session** — ten questions are generated up front; a seed makes the
//!    run reproducible.
//! 3. **Answers** — each line typed goes through the keypad buffer, then the
//!    session. Wrong answers print a hint.
//! 4. **Summary** — the result is banded, a themed message is composed, and
//!    the JSON report a client would render is printed.
//!
//! Cues meant for the speaker are logged through `tracing`; set
//! `RUST_LOG=info` to see them.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;
use ultra_math::{
    announce_answer, announce_result, seeded_rng, to_result_report, AnswerInput, Difficulty,
    QuizSession, Settings, TracingAnnouncer,
};

fn parse_difficulty(s: &str) -> Option<Difficulty> {
    match s.to_ascii_uppercase().as_str() {
        "C" => Some(Difficulty::C),
        "B" => Some(Difficulty::B),
        "A" => Some(Difficulty::A),
        "S" => Some(Difficulty::S),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let difficulty = args.next().and_then(|s| parse_difficulty(&s)).unwrap_or(Difficulty::C);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    let settings = Settings::preset(difficulty);
    let mut rng = seeded_rng(seed);
    let mut announcer = TracingAnnouncer;
    let mut session = QuizSession::new(settings, &mut rng)?;

    println!();
    println!("══ Ultra Math — level {} ({}) ══", difficulty, difficulty.label());
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(question) = session.current_question().cloned() {
        let index = session.current_index();
        print!("  [{}/10]  {}  ", index + 1, question);
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let mut input = AnswerInput::new();
        for c in line?.trim().chars() {
            input.press_char(c);
        }
        if !input.is_submittable() {
            println!("  (type a number)");
            continue;
        }

        let outcome = match session.submit_answer(index, input.as_str()) {
            Ok(outcome) => outcome,
            Err(e) => {
                println!("  ({e})");
                continue;
            }
        };
        let feedback = announce_answer(&mut announcer, &outcome, &mut rng);
        let mark = if outcome.is_correct { "✓" } else { "✗" };
        println!("  {mark} {}", feedback.phrase);
        if let Some(hint) = feedback.explanation {
            println!("     {hint}");
        }
    }

    if !session.is_complete() {
        println!();
        println!("  Mission aborted.");
        return Ok(());
    }

    let next = session.settings().next_level();
    let result = session.finish()?;
    let summary = announce_result(&mut announcer, &result, &mut rng);

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Score: {}/{}  Stars: {}  Mood: {}",
        result.correct_count, result.total_questions, result.stars(), summary.mood);
    println!("  {}", summary.message);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if result.is_perfect() && next.difficulty != difficulty {
        println!("  Next level unlocked: {}", next.difficulty);
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&to_result_report(&result, &summary))?);
    Ok(())
}
