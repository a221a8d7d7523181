use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::error::PipelineError;
use crate::models::ConversationRecord;
use crate::pipeline::builder::process_conversations;

struct CacheEntry {
    modified: Option<SystemTime>,
    records: Arc<Vec<ConversationRecord>>,
}

/// Caller-owned memoization of [`process_conversations`].
///
/// Keyed by input path plus file modification time, so an edited dataset is
/// re-parsed on the next load while repeated loads of an unchanged file are
/// free. There is no global instance and no time-based expiry; the cache
/// lives exactly as long as its owner (typically one reporting session) and
/// [`DatasetCache::clear`] is the only other invalidation.
#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the dataset for `path`, running the pipeline only when the
    /// path is unseen or the file's modification time has changed.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Vec<ConversationRecord>>, PipelineError> {
        let modified = file_mtime(path);
        if let Some(entry) = self.entries.get(path)
            && entry.modified == modified
            && modified.is_some()
        {
            return Ok(Arc::clone(&entry.records));
        }

        let records = Arc::new(process_conversations(path)?);
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry { modified, records: Arc::clone(&records) },
        );
        Ok(records)
    }

    /// Drop all cached datasets.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn file_mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}
