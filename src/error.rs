//! Quiz scoring error types.
//!
//! Both variants are call-time usage errors raised by the scorer. Skipped
//! sentences and thin distractor pools during generation are not errors:
//! the former shortens the quiz, the latter is absorbed by filler padding.

use thiserror::Error;

/// Errors raised when scoring a quiz.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The submitted answer sequence does not line up with the questions.
    /// Never silently truncated or padded.
    #[error("submitted {submitted} answers for {questions} questions")]
    AnswerCountMismatch { questions: usize, submitted: usize },

    /// Scoring a zero-length question set; the percentage is undefined.
    #[error("cannot score an empty quiz")]
    EmptyQuiz,
}
