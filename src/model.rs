//! Core data model types for quizforge.
//!
//! These are the fundamental types the crate uses to represent generated
//! questions, scoring results, and the difficulty label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The placeholder substituted for the answer in a rendered prompt.
pub const BLANK_MARKER: &str = "_____";

/// A single multiple-choice question generated from one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The source sentence with the answer blanked out.
    pub prompt: String,
    /// The candidate answers shown to the user, correct one included.
    pub options: Vec<String>,
    /// The correct answer. Always present in `options`.
    pub answer: String,
}

/// Requested difficulty for a generated quiz.
///
/// Accepted on the generation API for forward compatibility; every level
/// currently maps to the same tuning (see `QuizConfig::for_difficulty`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Qualitative feedback bucket derived from the percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// 80% or above.
    Excellent,
    /// 50% or above.
    Good,
    /// Below 50%.
    NeedsImprovement,
}

impl Tier {
    /// Classify a percentage in `[0, 100]`. Thresholds are checked in
    /// descending order; the first match wins.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Tier::Excellent
        } else if percentage >= 50.0 {
            Tier::Good
        } else {
            Tier::NeedsImprovement
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Excellent => write!(f, "excellent"),
            Tier::Good => write!(f, "good"),
            Tier::NeedsImprovement => write!(f, "needs_improvement"),
        }
    }
}

/// Outcome of scoring a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Number of correctly answered questions.
    pub correct: usize,
    /// Total number of questions scored.
    pub total: usize,
    /// `100 * correct / total`.
    pub percentage: f64,
    /// Feedback bucket for `percentage`.
    pub tier: Tier,
}
