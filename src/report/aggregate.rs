use serde::Serialize;

use crate::models::ConversationRecord;

/// One row of the aggregate report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedianTurnLength {
    pub conversation_id: usize,
    pub median_turn_length: usize,
}

/// Median turn length per conversation, excluding one known outlier.
///
/// The outlier row stays in the canonical dataset; it is dropped here and
/// only here, so "realistic" statistics never see it. For each remaining
/// row the median is taken over `words_per_turn` when turn metrics are
/// present and non-empty, falling back to the row's `dialogue_length`
/// otherwise. Output is sorted ascending by `conversation_id`; an empty
/// dataset yields an empty table. The input records are not modified.
pub fn compute_median_dialogue_lengths(
    records: &[ConversationRecord],
    outlier_conversation_id: usize,
) -> Vec<MedianTurnLength> {
    let mut rows: Vec<MedianTurnLength> = records
        .iter()
        .filter(|r| r.conversation_id != outlier_conversation_id)
        .map(|r| MedianTurnLength {
            conversation_id: r.conversation_id,
            median_turn_length: median_turn_length(r),
        })
        .collect();
    rows.sort_by_key(|row| row.conversation_id);
    rows
}

fn median_turn_length(record: &ConversationRecord) -> usize {
    match &record.turn_metrics {
        Some(metrics) if !metrics.words_per_turn.is_empty() => median(&metrics.words_per_turn),
        _ => record.dialogue_length,
    }
}

/// Integer median. Even-length input averages the middle pair with
/// truncation toward zero, matching `int(median(...))` over whole numbers.
fn median(values: &[usize]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2
    }
}
