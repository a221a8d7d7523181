use crate::analysis::tokenize::count_words;
use crate::models::Message;

const ROLE_SYSTEM: &str = "system";

/// Total word count of a conversation, excluding system-role messages.
///
/// Pure and deterministic: same messages, same tokenizer, same result. A
/// conversation with only system messages (or none) has length 0.
pub fn compute_dialogue_length(messages: &[Message]) -> usize {
    messages
        .iter()
        .filter(|m| !m.has_role(ROLE_SYSTEM))
        .map(|m| count_words(&m.content))
        .sum()
}

/// Word count of each individual turn, in message order.
///
/// Unlike [`compute_dialogue_length`], system turns are included here: the
/// per-turn series describes the shape of the whole transcript, and
/// consumers that want user/assistant balance can filter by role themselves.
pub fn words_per_turn(messages: &[Message]) -> Vec<usize> {
    messages.iter().map(|m| count_words(&m.content)).collect()
}
