use std::fs;
use std::path::Path;

use crate::error::PipelineError;
use crate::models::RawConversationRecord;

/// Read the dataset file and return its conversations in file order.
///
/// The format is auto-detected from the first non-whitespace character:
/// `[` means the whole document is one JSON array, anything else means
/// newline-delimited JSON with blank lines skipped. File order is
/// significant downstream, where it becomes `conversation_id`.
///
/// # Errors
///
/// - [`PipelineError::FileAccess`] if the path cannot be read.
/// - [`PipelineError::MalformedInput`] if the array document, or any
///   non-blank line in line-delimited mode, is not valid JSON. Line mode
///   aborts on the first bad line; there is no per-line recovery.
pub fn read_raw_records(path: &Path) -> Result<Vec<RawConversationRecord>, PipelineError> {
    let text = fs::read_to_string(path)
        .map_err(|source| PipelineError::FileAccess { path: path.to_path_buf(), source })?;

    if text.trim_start().starts_with('[') {
        parse_array(path, &text)
    } else {
        parse_lines(path, &text)
    }
}

fn parse_array(path: &Path, text: &str) -> Result<Vec<RawConversationRecord>, PipelineError> {
    serde_json::from_str(text).map_err(|source| PipelineError::MalformedInput {
        path: path.to_path_buf(),
        line: None,
        source,
    })
}

fn parse_lines(path: &Path, text: &str) -> Result<Vec<RawConversationRecord>, PipelineError> {
    let mut records = Vec::new();
    for (line_num, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record =
            serde_json::from_str(line).map_err(|source| PipelineError::MalformedInput {
                path: path.to_path_buf(),
                line: Some(line_num + 1),
                source,
            })?;
        records.push(record);
    }
    Ok(records)
}
