//! Dataset file normalizer.
//!
//! # Error Handling Strategy
//!
//! The dataset is a single flat file, so this module is stricter than a
//! typical multi-file indexer would be:
//!
//! - **File-level failures**: an unreadable path is fatal and surfaces as
//!   [`crate::error::PipelineError::FileAccess`].
//!
//! - **Document failures**: invalid JSON is fatal. In array mode the whole
//!   document fails as one unit; in line-delimited mode the run aborts on
//!   the first bad line. There is deliberately no skip-and-continue mode:
//!   a dataset with unparsable records should be fixed at the source, not
//!   silently truncated.
//!
//! - **Field absence is not an error**: missing or null `metadata`,
//!   `inputs`, `messages`, `role`, and `content` degrade to empty defaults
//!   during deserialization (see `deserializers`), so a structurally thin
//!   record never aborts the run.

pub mod deserializers;
pub mod records;

pub use records::read_raw_records;
