//! Answer scoring and feedback classification.

use crate::error::QuizError;
use crate::model::{Question, ScoreResult, Tier};

/// Score submitted answers against the generated key.
///
/// `submitted` must hold exactly one entry per question, in question order;
/// any other shape is a usage error, never truncated or padded away.
/// Answers match on case-insensitive exact equality. Pure: identical inputs
/// always yield identical results.
pub fn score(questions: &[Question], submitted: &[String]) -> Result<ScoreResult, QuizError> {
    if submitted.len() != questions.len() {
        return Err(QuizError::AnswerCountMismatch {
            questions: questions.len(),
            submitted: submitted.len(),
        });
    }
    if questions.is_empty() {
        return Err(QuizError::EmptyQuiz);
    }

    let correct = questions
        .iter()
        .zip(submitted)
        .filter(|(question, answer)| answer.to_lowercase() == question.answer.to_lowercase())
        .count();
    let total = questions.len();
    let percentage = 100.0 * correct as f64 / total as f64;

    Ok(ScoreResult {
        correct,
        total,
        percentage,
        tier: Tier::from_percentage(percentage),
    })
}
