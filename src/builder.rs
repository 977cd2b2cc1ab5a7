//! Quiz generation engine.
//!
//! Consumes segmented sentences and emits multiple-choice question records:
//! one keyword per sentence is blanked out as the answer, the remaining
//! keywords plus fixed fillers become distractors.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::model::{Difficulty, Question, BLANK_MARKER};
use crate::segmenter;

/// Fillers always added to the distractor pool alongside sentence keywords.
const FIXED_FILLERS: [&str; 2] = ["OptionX", "OptionY"];

/// Tuning knobs for quiz generation.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Tokens must be strictly longer than this many characters to count
    /// as keywords. Word length is the sole difficulty heuristic.
    pub keyword_min_length: usize,
    /// Number of wrong options drawn per question.
    pub distractor_count: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            keyword_min_length: 4,
            distractor_count: 3,
        }
    }
}

impl QuizConfig {
    /// Config for a requested difficulty level.
    ///
    /// Every level currently maps to the same tuning; the label is accepted
    /// so callers can pass it through without the mapping leaking into
    /// their code. Callers that want real tuning set the fields directly.
    pub fn for_difficulty(_difficulty: Difficulty) -> Self {
        Self::default()
    }
}

/// The quiz generation engine.
///
/// Owns its random source so a fixed seed reproduces the full quiz:
/// answer choice, distractor draw, and option order.
pub struct QuizBuilder {
    config: QuizConfig,
    rng: StdRng,
}

impl QuizBuilder {
    /// Create a builder with an entropy-seeded random source.
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a builder with a specific seed (for deterministic output).
    pub fn with_seed(config: QuizConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate up to `num_questions` questions from `text`.
    ///
    /// Only the first `min(num_questions, sentences)` sentences are
    /// considered, in input order; a sentence without keywords is skipped
    /// without pulling a later sentence in, so the output can be shorter
    /// than requested.
    pub fn generate(&mut self, text: &str, num_questions: usize) -> Vec<Question> {
        let sentences = segmenter::split_sentences(text);
        let considered = num_questions.min(sentences.len());

        let mut questions = Vec::with_capacity(considered);
        for sentence in &sentences[..considered] {
            match self.question_from_sentence(sentence) {
                Some(question) => questions.push(question),
                None => {
                    tracing::debug!(%sentence, "skipping sentence without keywords");
                }
            }
        }
        questions
    }

    /// Build one question from a sentence, or `None` if it has no keywords.
    fn question_from_sentence(&mut self, sentence: &str) -> Option<Question> {
        let keywords: Vec<String> = segmenter::split_words(sentence)
            .into_iter()
            .filter(|word| word.chars().count() > self.config.keyword_min_length)
            .collect();

        let answer = keywords.choose(&mut self.rng)?.clone();

        // Only the first textual occurrence is blanked; a repeated answer
        // word stays visible later in the prompt.
        let prompt = sentence.replacen(answer.as_str(), BLANK_MARKER, 1);

        let distractors = self.draw_distractors(&keywords, &answer);
        let mut options = Vec::with_capacity(distractors.len() + 1);
        options.push(answer.clone());
        options.extend(distractors);
        options.shuffle(&mut self.rng);

        Some(Question {
            prompt,
            options,
            answer,
        })
    }

    /// Draw `distractor_count` distinct wrong options.
    ///
    /// The pool is the sentence's other keywords (first-occurrence order,
    /// deduplicated) plus the fixed fillers. A short sentence can leave the
    /// pool too thin for the draw; it is then padded with numbered fillers,
    /// which keeps generation total and deterministic under a fixed seed.
    fn draw_distractors(&mut self, keywords: &[String], answer: &str) -> Vec<String> {
        let mut pool: Vec<String> = Vec::new();
        for word in keywords {
            if word != answer && !pool.contains(word) {
                pool.push(word.clone());
            }
        }
        for filler in FIXED_FILLERS {
            if filler != answer && !pool.iter().any(|p| p == filler) {
                pool.push(filler.to_string());
            }
        }

        if pool.len() < self.config.distractor_count {
            tracing::debug!(
                candidates = pool.len(),
                needed = self.config.distractor_count,
                "padding distractor pool with numbered fillers"
            );
            let mut n = 1usize;
            while pool.len() < self.config.distractor_count {
                let filler = format!("Option{n}");
                n += 1;
                if filler != answer && !pool.contains(&filler) {
                    pool.push(filler);
                }
            }
        }

        pool.choose_multiple(&mut self.rng, self.config.distractor_count)
            .cloned()
            .collect()
    }
}

/// Generate a quiz with default tuning for the given difficulty.
///
/// Convenience entry point over [`QuizBuilder`], entropy-seeded.
pub fn generate_quiz(text: &str, num_questions: usize, difficulty: Difficulty) -> Vec<Question> {
    QuizBuilder::new(QuizConfig::for_difficulty(difficulty)).generate(text, num_questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SENTENCES: &str = "The quick brown fox jumps. A lazy dog sleeps overnight.";

    fn seeded(seed: u64) -> QuizBuilder {
        QuizBuilder::with_seed(QuizConfig::default(), seed)
    }

    #[test]
    fn generates_one_question_per_keyword_sentence() {
        let questions = generate_quiz(TWO_SENTENCES, 2, Difficulty::Easy);
        assert_eq!(questions.len(), 2);
        for question in &questions {
            assert_eq!(question.options.len(), 4);
            assert!(question.options.contains(&question.answer));
            assert!(question.prompt.contains(BLANK_MARKER));
        }
    }

    #[test]
    fn options_are_pairwise_distinct() {
        let questions = seeded(7).generate(TWO_SENTENCES, 2);
        for question in &questions {
            for (i, a) in question.options.iter().enumerate() {
                for b in &question.options[i + 1..] {
                    assert_ne!(a, b, "duplicate option in {question:?}");
                }
            }
        }
    }

    #[test]
    fn prompt_reconstructs_to_source_sentence() {
        let questions = seeded(3).generate(TWO_SENTENCES, 2);
        let sentences = [
            "The quick brown fox jumps.",
            "A lazy dog sleeps overnight.",
        ];
        for (question, sentence) in questions.iter().zip(sentences) {
            assert_eq!(
                question.prompt.replacen(BLANK_MARKER, &question.answer, 1),
                sentence
            );
        }
    }

    #[test]
    fn keyword_less_text_yields_empty_quiz() {
        let questions = generate_quiz("Go. Is. Ok.", 3, Difficulty::Medium);
        assert!(questions.is_empty());
    }

    #[test]
    fn skipped_sentence_is_not_replaced_by_a_later_one() {
        let text = "Go on. Elephants remember everything. Zebras gallop quickly.";
        let questions = seeded(11).generate(text, 2);
        // Sentence 1 has no keywords and sentence 3 is beyond the window.
        assert_eq!(questions.len(), 1);
        assert_eq!(
            questions[0]
                .prompt
                .replacen(BLANK_MARKER, &questions[0].answer, 1),
            "Elephants remember everything."
        );
    }

    #[test]
    fn requesting_more_questions_than_sentences_is_fine() {
        let questions = seeded(5).generate(TWO_SENTENCES, 10);
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn zero_questions_requested_yields_empty_quiz() {
        let questions = seeded(5).generate(TWO_SENTENCES, 0);
        assert!(questions.is_empty());
    }

    #[test]
    fn replaces_only_the_first_occurrence() {
        // "abcde" is the only keyword, so it must be the answer.
        let questions = seeded(1).generate("abcde abcde is ok.", 1);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer, "abcde");
        assert_eq!(questions[0].prompt, "_____ abcde is ok.");
    }

    #[test]
    fn thin_pool_is_padded_with_fillers() {
        let questions = seeded(2).generate("Peculiar.", 1);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer, "Peculiar");
        let mut options = questions[0].options.clone();
        options.sort();
        assert_eq!(options, vec!["Option1", "OptionX", "OptionY", "Peculiar"]);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let first = seeded(42).generate(TWO_SENTENCES, 2);
        let second = seeded(42).generate(TWO_SENTENCES, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn difficulty_does_not_change_selection() {
        let easy =
            QuizBuilder::with_seed(QuizConfig::for_difficulty(Difficulty::Easy), 42)
                .generate(TWO_SENTENCES, 2);
        let hard =
            QuizBuilder::with_seed(QuizConfig::for_difficulty(Difficulty::Hard), 42)
                .generate(TWO_SENTENCES, 2);
        assert_eq!(easy, hard);
    }

    #[test]
    fn distractor_count_is_tunable() {
        let config = QuizConfig {
            distractor_count: 5,
            ..QuizConfig::default()
        };
        let questions = QuizBuilder::with_seed(config, 9).generate("Short words here okay.", 1);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), 6);
    }

    #[test]
    fn keyword_min_length_is_tunable() {
        let config = QuizConfig {
            keyword_min_length: 2,
            ..QuizConfig::default()
        };
        // "Go." has no token longer than 2 chars; "Fox ran far." does.
        let mut builder = QuizBuilder::with_seed(config, 9);
        assert!(builder.generate("Go. Is.", 2).is_empty());
        assert_eq!(builder.generate("Fox ran far.", 1).len(), 1);
    }
}
