//! Coach Metrics - Derive per-conversation metrics from AI coaching transcripts
//!
//! This library ingests a dataset of coaching-conversation transcripts (a
//! JSON array or newline-delimited JSON, auto-detected) and turns it into a
//! tabular model with one row per conversation. It supports:
//!
//! - Normalizing heterogeneous records with missing or null fields
//! - Flagging successful conversations via a fixed short-feedback heuristic
//! - Word-count metrics (dialogue length, per-turn counts)
//! - Outlier-aware aggregate statistics (median turn length per conversation)
//! - CSV export of both the canonical and the aggregate tables
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use coach_metrics::process_conversations;
//!
//! let records = process_conversations(Path::new("dataset_conversations.txt"))?;
//! println!("Processed {} conversations", records.len());
//! # Ok::<(), coach_metrics::PipelineError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod report;

// Re-export commonly used types
pub use analysis::{classify_success, compute_dialogue_length, count_words, word_tokenize};
pub use error::PipelineError;
pub use models::{ConversationRecord, Message, TurnMetrics};
pub use pipeline::{DatasetCache, process_conversations};
pub use report::{MedianTurnLength, compute_median_dialogue_lengths};
