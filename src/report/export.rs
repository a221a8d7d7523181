use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::ConversationRecord;
use crate::report::aggregate::MedianTurnLength;

const RECORD_HEADER: &str =
    "conversation_id,metadata,messages,final_feedback,successful,error_info,dialogue_length,turn_metrics";

/// Write the canonical per-conversation table as CSV.
///
/// Nested columns (`metadata`, `messages`, `error_info`, `turn_metrics`)
/// are serialized as JSON text inside the CSV cell; absent optional fields
/// render as empty cells rather than error markers.
pub fn write_records_csv<W: Write>(records: &[ConversationRecord], mut out: W) -> Result<()> {
    writeln!(out, "{}", RECORD_HEADER).context("Failed to write CSV header")?;
    for record in records {
        let row = [
            record.conversation_id.to_string(),
            json_field(&record.metadata)?,
            json_field(&record.messages)?,
            record.final_feedback.clone().unwrap_or_default(),
            record.successful.to_string(),
            match &record.error_info {
                Some(value) => json_field(value)?,
                None => String::new(),
            },
            record.dialogue_length.to_string(),
            match &record.turn_metrics {
                Some(metrics) => json_field(metrics)?,
                None => String::new(),
            },
        ];
        write_row(&mut out, &row)?;
    }
    Ok(())
}

/// Write the aggregate report as a two-column CSV.
pub fn write_medians_csv<W: Write>(rows: &[MedianTurnLength], mut out: W) -> Result<()> {
    writeln!(out, "conversation_id,median_turn_length").context("Failed to write CSV header")?;
    for row in rows {
        writeln!(out, "{},{}", row.conversation_id, row.median_turn_length)
            .context("Failed to write CSV row")?;
    }
    Ok(())
}

fn json_field<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).context("Failed to serialize CSV field as JSON")
}

fn write_row<W: Write>(out: &mut W, fields: &[String]) -> Result<()> {
    let line = fields.iter().map(|f| escape(f)).collect::<Vec<_>>().join(",");
    writeln!(out, "{}", line).context("Failed to write CSV row")?;
    Ok(())
}

/// Quote a field when it contains a comma, quote, or newline (RFC 4180).
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
