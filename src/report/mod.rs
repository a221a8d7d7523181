//! Cross-conversation reporting: outlier-aware aggregate statistics and CSV
//! export of both the canonical table and the aggregate table.

pub mod aggregate;
pub mod export;

pub use aggregate::{MedianTurnLength, compute_median_dialogue_lengths};
pub use export::{write_medians_csv, write_records_csv};
