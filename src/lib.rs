//! quizforge — cloze quiz generation and scoring.
//!
//! This crate turns a block of plain text into multiple-choice
//! fill-in-the-blank questions and scores submitted answers against the
//! generated key. Text extraction and answer collection belong to the
//! caller; the crate only consumes strings and produces records.

pub mod builder;
pub mod error;
pub mod model;
pub mod scorer;
pub mod segmenter;
