//! Per-conversation analysis: word tokenization, the success heuristic, and
//! length metrics. All functions here are pure; the pipeline orchestrator
//! wires them together.

pub mod metrics;
pub mod success;
pub mod tokenize;

pub use metrics::{compute_dialogue_length, words_per_turn};
pub use success::{
    DEFAULT_FEEDBACK_LENGTH_THRESHOLD, DEFAULT_LAST_N, classify_success,
};
pub use tokenize::{count_words, word_tokenize};
