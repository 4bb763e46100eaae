//! Index store - load/save of the persisted JSON index
//!
//! The index lives at `<root>/index.json`, pretty-printed. Loading a
//! missing index synthesizes and persists a default empty document
//! (deliberate first-run behavior, not an error path). Saving rewrites
//! the whole document through a temp-file rename so a crash can never
//! leave a truncated index behind.

use crate::journal::error::{JournalError, JournalResult};
use crate::journal::types::Index;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the index document inside the journal root
pub const INDEX_FILENAME: &str = "index.json";

/// Owns the location of the persisted index and its invariants.
///
/// The store never patches the document in place: the only mutation path
/// is load-before-read, mutate, save-after-write.
#[derive(Debug, Clone)]
pub struct IndexStore {
    path: PathBuf,
}

impl IndexStore {
    /// Create a store rooted at the given journal directory
    pub fn open(root: &Path) -> Self {
        Self {
            path: root.join(INDEX_FILENAME),
        }
    }

    /// Path to the index file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index.
    ///
    /// If the file is absent, a default empty index is created, persisted,
    /// and returned. If the file exists but fails to parse as the expected
    /// schema, this fails with [`JournalError::IndexCorrupt`].
    pub fn load(&self) -> JournalResult<Index> {
        if !self.path.exists() {
            tracing::info!(path = ?self.path, "index not found, initializing empty index");
            let mut index = Index::new();
            self.save(&mut index)?;
            return Ok(index);
        }

        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| JournalError::IndexCorrupt {
            path: self.path.clone(),
            error: e.to_string(),
        })
    }

    /// Persist the full index document.
    ///
    /// Stamps `stats.last_modified` to the current time as a side effect,
    /// then writes the whole document (no partial patching) via
    /// write-temp-then-rename for an atomic replace.
    pub fn save(&self, index: &mut Index) -> JournalResult<()> {
        index.stats.last_modified = Utc::now();

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(index)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(path = ?self.path, entries = index.entries.len(), "index saved");
        Ok(())
    }
}
