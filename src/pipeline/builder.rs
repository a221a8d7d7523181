//! Pipeline orchestrator: normalized records in, canonical table out.
//!
//! # Error Handling Strategy
//!
//! File-level problems (unreadable path, unparsable JSON) are fatal and
//! propagate as [`PipelineError`]. Record-level thinness — missing
//! `metadata`, `inputs`, or `messages` — never aborts the run; those fields
//! default to empty containers during normalization and the record still
//! produces a row. Operators see run health through the summary printed at
//! the end (totals, distinct feedback strings, success count), which is
//! informational only and not part of the return contract.

use std::path::Path;

use crate::analysis::{
    DEFAULT_FEEDBACK_LENGTH_THRESHOLD, DEFAULT_LAST_N, classify_success, compute_dialogue_length,
    words_per_turn,
};
use crate::error::PipelineError;
use crate::models::{ConversationRecord, TurnMetrics};
use crate::parsers::read_raw_records;

/// Run the full pipeline over one dataset file.
///
/// Produces one [`ConversationRecord`] per input conversation, in file
/// order, with `conversation_id` assigned as the 0-based input position.
/// Pure derivation apart from the telemetry printed to stdout; running it
/// twice on an unchanged file yields identical records.
///
/// # Errors
///
/// Returns [`PipelineError`] when the file cannot be read or its JSON is
/// malformed (see [`crate::parsers::read_raw_records`] for the exact
/// policy).
pub fn process_conversations(path: &Path) -> Result<Vec<ConversationRecord>, PipelineError> {
    let raw_records = read_raw_records(path)?;
    println!("Total conversations found: {}", raw_records.len());

    let mut records = Vec::with_capacity(raw_records.len());
    for (idx, raw) in raw_records.into_iter().enumerate() {
        let messages = raw.inputs.messages;
        let (successful, final_feedback) =
            classify_success(&messages, DEFAULT_LAST_N, DEFAULT_FEEDBACK_LENGTH_THRESHOLD);
        let error_info = raw.metadata.get("error").cloned();
        let dialogue_length = compute_dialogue_length(&messages);
        // Absent rather than empty for message-less conversations, so the
        // aggregate reporter's dialogue_length fallback stays reachable.
        let turn_metrics = if messages.is_empty() {
            None
        } else {
            Some(TurnMetrics { words_per_turn: words_per_turn(&messages) })
        };

        records.push(ConversationRecord {
            conversation_id: idx,
            metadata: raw.metadata,
            messages,
            final_feedback,
            successful,
            error_info,
            dialogue_length,
            turn_metrics,
        });
    }

    print_summary(&records);
    Ok(records)
}

fn print_summary(records: &[ConversationRecord]) {
    let mut feedback: Vec<&str> = Vec::new();
    for record in records {
        if let Some(text) = record.final_feedback.as_deref()
            && !feedback.contains(&text)
        {
            feedback.push(text);
        }
    }
    println!("Feedback Summary:");
    println!("{:?}", feedback);

    let successful = records.iter().filter(|r| r.successful).count();
    println!("Successful conversations: {} out of {}", successful, records.len());
}
