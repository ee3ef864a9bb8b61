//! Fetch a single vocabulary word from the command line.
//!
//! Usage:
//!   GEMINI_API_KEY=... cargo run --bin vocab-word
//!   GEMINI_API_KEY=... cargo run --bin vocab-word -- --json
//!   GEMINI_API_KEY=... cargo run --bin vocab-word -- --interests chess --difficulty advanced --quiz

use std::io::BufRead;
use std::sync::Arc;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use vocab_wordgen::{
    score_quiz, GeminiClient, ProviderConfig, QuizQuestion, WordGenerator, WordPreferences,
    WordRecord,
};

/// Print a freshly generated vocabulary word.
#[derive(Parser)]
#[command(name = "vocab-word")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print the raw JSON record instead of a formatted card
    #[arg(long)]
    json: bool,

    /// Override the model identifier (default: GEMINI_MODEL or gemini-2.0-flash-001)
    #[arg(short, long)]
    model: Option<String>,

    /// Topics to pick the word from (e.g. "astronomy, sailing")
    #[arg(short, long)]
    interests: Option<String>,

    /// Difficulty level (e.g. beginner, intermediate, advanced)
    #[arg(short, long)]
    difficulty: Option<String>,

    /// Follow the word with a multiple-choice quiz about it
    #[arg(short, long)]
    quiz: bool,
}

/// Ask each question on stdout and read the answer from stdin.
///
/// An answer is either the option number or the option text.
fn run_quiz(questions: &[QuizQuestion]) -> f64 {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut answers: Vec<Option<String>> = Vec::with_capacity(questions.len());

    for (index, q) in questions.iter().enumerate() {
        println!();
        println!("{} {}", style(format!("Q{}.", index + 1)).bold(), q.question);
        for (n, option) in q.options.iter().enumerate() {
            println!("  {}) {option}", n + 1);
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => {
                answers.push(None);
                continue;
            }
        };
        let line = line.trim();
        let chosen = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| q.options.get(n))
            .cloned()
            .or_else(|| q.options.iter().find(|o| o.eq_ignore_ascii_case(line)).cloned());

        match &chosen {
            Some(answer) if *answer == q.correct_answer => {
                println!("{}", style("Correct!").green())
            }
            _ => println!(
                "{} {}",
                style("The answer was:").red(),
                q.correct_answer
            ),
        }
        answers.push(chosen);
    }

    let answers: Vec<Option<&str>> = answers.iter().map(Option::as_deref).collect();
    score_quiz(questions, &answers)
}

fn print_card(record: &WordRecord) {
    let missing = || style("-").dim().to_string();

    println!(
        "{}",
        style(record.word().unwrap_or_default()).bold().cyan()
    );
    println!();
    println!("{} {}", style("Meaning:").bold(), record.meaning().unwrap_or_default());
    println!(
        "{} {}",
        style("In simpler terms:").bold(),
        record.rephrased_meaning().unwrap_or_default()
    );

    let synonyms = record.synonyms();
    let antonyms = record.antonyms();
    println!(
        "{} {}",
        style("Synonyms:").bold().green(),
        if synonyms.is_empty() { missing() } else { synonyms.join(", ") }
    );
    println!(
        "{} {}",
        style("Antonyms:").bold().red(),
        if antonyms.is_empty() { missing() } else { antonyms.join(", ") }
    );
    println!();
    println!(
        "{}",
        style(format!("\"{}\"", record.example_sentence().unwrap_or_default())).italic()
    );
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match ProviderConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            std::process::exit(1);
        }
    };
    if let Some(model) = cli.model {
        config.model = model;
    }

    let client = match GeminiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "failed to create provider client");
            std::process::exit(1);
        }
    };

    let generator = WordGenerator::new(Arc::new(client), &config);
    let preferences = WordPreferences {
        interests: cli.interests,
        difficulty: cli.difficulty,
    };

    let record = match generator.generate_for(&preferences).await {
        Ok(record) => record,
        Err(e) => {
            tracing::error!(error = %e, kind = ?e.kind(), "failed to generate word");
            eprintln!("{} {e}", style("error:").bold().red());
            std::process::exit(1);
        }
    };

    let quiz = if cli.quiz {
        let word = record.word().unwrap_or_default();
        match generator.generate_quiz(word).await {
            Ok(quiz) => Some(quiz),
            Err(e) => {
                tracing::error!(error = %e, kind = ?e.kind(), "failed to generate quiz");
                eprintln!("{} {e}", style("error:").bold().red());
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    if cli.json {
        let output = match &quiz {
            Some(quiz) => serde_json::json!({ "word": record, "quiz": quiz }),
            None => record.into_value(),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize record");
                std::process::exit(1);
            }
        }
        return;
    }

    print_card(&record);
    if let Some(quiz) = quiz {
        let score = run_quiz(&quiz);
        println!();
        println!("{} {score:.1}%", style("Your score:").bold());
    }
}
