use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::parsers::deserializers::null_default;

/// One conversation exactly as it appears in the dataset file.
///
/// The source format guarantees very little: `metadata` and `inputs` may be
/// absent or `null`, and `metadata` carries arbitrary nested JSON. Absent
/// pieces degrade to empty containers rather than failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConversationRecord {
    #[serde(default, deserialize_with = "null_default")]
    pub metadata: Map<String, Value>,
    #[serde(default, deserialize_with = "null_default")]
    pub inputs: RawInputs,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInputs {
    #[serde(default, deserialize_with = "null_default")]
    pub messages: Vec<Message>,
}

/// A single conversation turn. Roles are free-form text and compared
/// case-insensitively against the known roles (`system`, `user`, `assistant`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "null_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_default")]
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self { role: role.into(), content: content.into() }
    }

    /// Case-insensitive role comparison against a lowercase role name.
    pub fn has_role(&self, role: &str) -> bool {
        self.role.eq_ignore_ascii_case(role)
    }
}

/// Per-turn word counts for one conversation.
///
/// `words_per_turn` covers every turn in message order, system turns
/// included; `dialogue_length` on the parent row is the coarser
/// system-excluded total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnMetrics {
    pub words_per_turn: Vec<usize>,
}

/// The canonical per-conversation row produced by the pipeline.
///
/// Created once per run, never mutated afterwards. `conversation_id` is the
/// 0-based position of the record in the input file, stable only for a fixed
/// file. `metadata` and `error_info` are opaque JSON carried through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub conversation_id: usize,
    pub metadata: Map<String, Value>,
    pub messages: Vec<Message>,
    pub final_feedback: Option<String>,
    pub successful: bool,
    pub error_info: Option<Value>,
    pub dialogue_length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn_metrics: Option<TurnMetrics>,
}
