//! The pipeline orchestrator and its session-scoped result cache.

pub mod builder;
pub mod cache;

pub use builder::process_conversations;
pub use cache::DatasetCache;
