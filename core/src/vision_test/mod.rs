//! Multiple-choice color vision screening.

pub mod catalog;
pub mod evaluator;

pub use catalog::{catalog, question, TestQuestion};
pub use evaluator::{analyze, analyze_with, tally, Tally, TestConfidence, TestOutcome, TestResponse};
