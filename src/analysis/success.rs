use crate::models::Message;

/// How many trailing messages the classifier inspects.
pub const DEFAULT_LAST_N: usize = 5;

/// Character-count ceiling (exclusive) for a user message to count as
/// feedback. The heuristic assumes genuine feedback is short.
pub const DEFAULT_FEEDBACK_LENGTH_THRESHOLD: usize = 50;

/// Decide whether a conversation ended with actionable user feedback.
///
/// A conversation is successful when one of its last `last_n` messages
/// mentions "feedback" (case-insensitive) and at least one user message
/// among those is shorter than `feedback_length_threshold` characters after
/// trimming. Returns the last such user message as the feedback string.
///
/// The heuristic favors precision over recall and is knowingly imperfect
/// versus human judgment; its exact steps are part of the contract and must
/// stay reproducible across runs.
pub fn classify_success(
    messages: &[Message],
    last_n: usize,
    feedback_length_threshold: usize,
) -> (bool, Option<String>) {
    // Too short to be a genuine conversation.
    if messages.len() < 3 {
        return (false, None);
    }

    let start = messages.len().saturating_sub(last_n);
    let last_messages = &messages[start..];

    if !last_messages.iter().any(|m| m.content.to_lowercase().contains("feedback")) {
        return (false, None);
    }

    let feedback = last_messages
        .iter()
        .filter(|m| m.has_role("user"))
        .map(|m| m.content.trim())
        .filter(|content| content.chars().count() < feedback_length_threshold)
        .next_back();

    match feedback {
        Some(content) => (true, Some(content.to_string())),
        None => (false, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;

    fn user(content: &str) -> Message {
        Message::new("user", content)
    }

    fn assistant(content: &str) -> Message {
        Message::new("assistant", content)
    }

    #[test]
    fn test_short_feedback_near_end_is_successful() {
        let messages = vec![
            user("I keep procrastinating on my goals"),
            assistant("Let's break them into smaller steps. Any feedback on this session?"),
            user("great, thanks for the feedback"),
        ];
        let (successful, feedback) =
            classify_success(&messages, DEFAULT_LAST_N, DEFAULT_FEEDBACK_LENGTH_THRESHOLD);
        assert!(successful);
        assert_eq!(feedback.as_deref(), Some("great, thanks for the feedback"));
    }

    #[test]
    fn test_fewer_than_three_messages_is_not_successful() {
        let messages = vec![user("hi"), assistant("any feedback?")];
        let (successful, feedback) =
            classify_success(&messages, DEFAULT_LAST_N, DEFAULT_FEEDBACK_LENGTH_THRESHOLD);
        assert!(!successful);
        assert!(feedback.is_none());
    }

    #[test]
    fn test_feedback_only_in_assistant_message_is_not_enough() {
        // "feedback" appears but no short user message exists among the tail.
        let long = "a".repeat(60);
        let messages = vec![
            user(&long),
            assistant("Thanks for sharing all that."),
            assistant("Could you give me some feedback on the session?"),
            user(&long),
        ];
        let (successful, feedback) =
            classify_success(&messages, DEFAULT_LAST_N, DEFAULT_FEEDBACK_LENGTH_THRESHOLD);
        assert!(!successful);
        assert!(feedback.is_none());
    }

    #[test]
    fn test_no_feedback_mention_in_tail() {
        let messages = vec![
            user("feedback early on does not count"),
            assistant("ok"),
            user("bye"),
            assistant("take care"),
            user("thanks"),
            assistant("goodbye"),
            user("done"),
        ];
        let (successful, _) =
            classify_success(&messages, DEFAULT_LAST_N, DEFAULT_FEEDBACK_LENGTH_THRESHOLD);
        assert!(!successful);
    }

    #[test]
    fn test_last_candidate_wins() {
        let messages = vec![
            user("start"),
            assistant("any feedback?"),
            user("it was fine"),
            user("really helpful session"),
        ];
        let (successful, feedback) =
            classify_success(&messages, DEFAULT_LAST_N, DEFAULT_FEEDBACK_LENGTH_THRESHOLD);
        assert!(successful);
        assert_eq!(feedback.as_deref(), Some("really helpful session"));
    }

    #[test]
    fn test_candidate_content_is_trimmed() {
        let messages = vec![
            user("start"),
            assistant("feedback please"),
            user("   loved it   "),
        ];
        let (_, feedback) =
            classify_success(&messages, DEFAULT_LAST_N, DEFAULT_FEEDBACK_LENGTH_THRESHOLD);
        assert_eq!(feedback.as_deref(), Some("loved it"));
    }

    #[test]
    fn test_threshold_is_strict() {
        let exactly_50 = "x".repeat(50);
        let messages = vec![user("start"), assistant("feedback?"), user(&exactly_50)];
        let (successful, _) = classify_success(&messages, DEFAULT_LAST_N, 50);
        assert!(!successful);

        let forty_nine = "x".repeat(49);
        let messages = vec![user("start"), assistant("feedback?"), user(&forty_nine)];
        let (successful, _) = classify_success(&messages, DEFAULT_LAST_N, 50);
        assert!(successful);
    }

    #[test]
    fn test_feedback_mention_is_case_insensitive() {
        let messages = vec![user("start"), assistant("Any FEEDBACK for me?"), user("all good")];
        let (successful, _) =
            classify_success(&messages, DEFAULT_LAST_N, DEFAULT_FEEDBACK_LENGTH_THRESHOLD);
        assert!(successful);
    }

    #[test]
    fn test_user_role_is_case_insensitive() {
        let messages = vec![
            Message::new("User", "start"),
            assistant("feedback?"),
            Message::new("USER", "very helpful"),
        ];
        let (successful, feedback) =
            classify_success(&messages, DEFAULT_LAST_N, DEFAULT_FEEDBACK_LENGTH_THRESHOLD);
        assert!(successful);
        assert_eq!(feedback.as_deref(), Some("very helpful"));
    }

    #[test]
    fn test_short_conversation_uses_all_messages_when_under_last_n() {
        let messages = vec![user("hello"), assistant("feedback?"), user("nice")];
        let (successful, _) = classify_success(&messages, 5, 50);
        assert!(successful);
    }
}
