//! Data models for the coaching-conversation metrics pipeline.
//!
//! This module defines the data structures used throughout the crate:
//!
//! - [`RawConversationRecord`] - One conversation as it appears in the dataset file
//! - [`Message`] - A single turn (`role` + `content`)
//! - [`ConversationRecord`] - The canonical per-conversation row the pipeline produces
//! - [`TurnMetrics`] - Optional per-turn word counts attached to a row
//!
//! These models use serde for JSON deserialization with null-tolerant
//! defaults (absent or `null` fields become empty containers) handled by the
//! `parsers::deserializers` module.

pub mod conversation;

pub use conversation::{
    ConversationRecord, Message, RawConversationRecord, RawInputs, TurnMetrics,
};
