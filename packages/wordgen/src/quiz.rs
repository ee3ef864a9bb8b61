//! Multiple-choice questions about a generated word.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// Parse already-cleaned text into a list of quiz questions.
///
/// The text must be a JSON array of questions. The list may not be empty and
/// every `correct_answer` must be one of its question's `options`.
pub fn parse_quiz(cleaned: &str) -> Result<Vec<QuizQuestion>, ValidationError> {
    let questions: Vec<QuizQuestion> =
        serde_json::from_str(cleaned).map_err(|source| ValidationError::ParseFailure {
            text: cleaned.to_string(),
            source,
        })?;

    if questions.is_empty() {
        return Err(ValidationError::InvalidQuiz("no questions".into()));
    }

    for (index, q) in questions.iter().enumerate() {
        if q.options.is_empty() {
            return Err(ValidationError::InvalidQuiz(format!(
                "question {} has no options",
                index + 1
            )));
        }
        if !q.options.contains(&q.correct_answer) {
            return Err(ValidationError::InvalidQuiz(format!(
                "question {}: correct answer {:?} is not among the options",
                index + 1,
                q.correct_answer
            )));
        }
    }

    Ok(questions)
}

/// Percentage of questions answered correctly, in `0.0..=100.0`.
///
/// `answers[i]` is the chosen option for `questions[i]`; missing answers
/// count as wrong.
pub fn score_quiz(questions: &[QuizQuestion], answers: &[Option<&str>]) -> f64 {
    if questions.is_empty() {
        return 0.0;
    }

    let correct = questions
        .iter()
        .zip(answers.iter().copied().chain(std::iter::repeat(None)))
        .filter(|(q, answer)| *answer == Some(q.correct_answer.as_str()))
        .count();

    correct as f64 / questions.len() as f64 * 100.0
}
