//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// Builder for creating dataset files in either supported format
pub struct DatasetBuilder {
    conversations: Vec<String>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self { conversations: Vec::new() }
    }

    /// Add a conversation from a raw JSON object string
    pub fn with_raw(mut self, json: &str) -> Self {
        self.conversations.push(json.to_string());
        self
    }

    /// Add a conversation built from (role, content) turns
    pub fn with_conversation(self, turns: &[(&str, &str)]) -> Self {
        self.with_conversation_and_metadata(turns, None)
    }

    /// Add a conversation with an explicit metadata object
    pub fn with_conversation_and_metadata(
        mut self,
        turns: &[(&str, &str)],
        metadata: Option<&str>,
    ) -> Self {
        let messages = turns
            .iter()
            .map(|(role, content)| {
                format!(
                    r#"{{"role":{},"content":{}}}"#,
                    serde_json::to_string(role).unwrap(),
                    serde_json::to_string(content).unwrap()
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        let metadata = metadata.unwrap_or("{}");
        self.conversations.push(format!(
            r#"{{"metadata":{},"inputs":{{"messages":[{}]}}}}"#,
            metadata, messages
        ));
        self
    }

    /// Write the dataset as one JSON array
    pub fn build_array(self) -> NamedTempFile {
        write_file(&format!("[{}]", self.conversations.join(",")))
    }

    /// Write the dataset as newline-delimited JSON
    pub fn build_jsonl(self) -> NamedTempFile {
        write_file(&self.conversations.join("\n"))
    }
}

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// A 3-turn conversation ending in a short user feedback message
pub fn successful_turns() -> Vec<(&'static str, &'static str)> {
    vec![
        ("user", "I want to stop procrastinating"),
        ("assistant", "Let's set one small goal. Any feedback on today's session?"),
        ("user", "great, thanks for the feedback"),
    ]
}

/// A 3-turn conversation with no feedback mention near the end
pub fn unsuccessful_turns() -> Vec<(&'static str, &'static str)> {
    vec![
        ("user", "I want to stop procrastinating"),
        ("assistant", "Let's set one small goal."),
        ("user", "ok, bye"),
    ]
}
