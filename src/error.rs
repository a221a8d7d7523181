use std::path::PathBuf;

use thiserror::Error;

/// Failures the pipeline surfaces to callers.
///
/// Both variants are fatal to a run: an unreadable file and an unparsable
/// document (or, in line-delimited mode, the first unparsable line) abort
/// processing. Per-record field absence is not an error and degrades to
/// empty defaults in the models instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot open dataset file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}{}: {source}", path.display(), fmt_line(*line))]
    MalformedInput {
        path: PathBuf,
        /// 1-based line number in line-delimited mode; `None` in array mode,
        /// where the whole document fails as one unit.
        line: Option<usize>,
        #[source]
        source: serde_json::Error,
    },
}

fn fmt_line(line: Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {}", n),
        None => String::new(),
    }
}
