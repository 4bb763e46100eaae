//! Quill journal core
//!
//! Journals question/answer sessions as dated markdown files under a
//! journal root, tracked in a single JSON index:
//!
//! - **slug**: topic → filesystem-safe identifier
//! - **store**: load/save of the index document, owns its invariants
//! - **resolver**: precedence-ordered lookup of a user-typed search term
//! - **writer**: new entry files + records, collision retry by topic variation
//! - **append**: section-aware insertion of timestamped updates
//!
//! # Layout on disk
//!
//! ```text
//! <root>/
//!   index.json                              the Index document
//!   entries/<YYYY>/<MM>/<YYYYMMDD>-<slug>.md  one file per entry
//! ```
//!
//! All operations are synchronous blocking file I/O. There is no locking
//! around the index file; concurrent processes can race with a
//! last-writer-wins rewrite (accepted for a single-user local tool).

mod append;
mod error;
mod resolver;
mod slug;
mod store;
mod template;
mod types;
mod writer;

pub use append::append_to_entry;
pub use error::{JournalError, JournalResult};
pub use resolver::{find_entry, latest_entry, Resolution};
pub use slug::slugify;
pub use store::{IndexStore, INDEX_FILENAME};
pub use template::{format_tags, render_entry, update_block, DEFAULT_TEMPLATE};
pub use types::{
    AiMetadata, AiStats, Confidence, EntryRecord, Index, IndexStats, RiskLevel, INDEX_VERSION,
};
pub use writer::{create_entry, entry_rel_path, CreateOutcome};

use std::fs;
use std::path::{Path, PathBuf};

/// Search term that selects the most recently created entry instead of
/// going through the resolver's precedence chain.
pub const LATEST_TERM: &str = "latest";

/// Facade over one journal root directory.
///
/// Owns the [`IndexStore`] and exposes the journal operations with the
/// load-before-read / save-after-write discipline; the index is never
/// patched in place.
#[derive(Debug, Clone)]
pub struct Journal {
    root: PathBuf,
    store: IndexStore,
}

impl Journal {
    /// Open a journal rooted at the given directory, creating the
    /// directory if needed. The index itself is initialized lazily on
    /// first load.
    pub fn open(root: impl Into<PathBuf>) -> JournalResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let store = IndexStore::open(&root);
        Ok(Self { root, store })
    }

    /// The journal root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The underlying index store
    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    /// Load the index (auto-initializing on first run)
    pub fn load_index(&self) -> JournalResult<Index> {
        self.store.load()
    }

    /// Persist the index
    pub fn save_index(&self, index: &mut Index) -> JournalResult<()> {
        self.store.save(index)
    }

    /// Create a new entry. See [`create_entry`].
    pub fn create_entry(
        &self,
        topic: &str,
        content: Option<&str>,
        tags: &[String],
        ai: Option<&AiMetadata>,
    ) -> JournalResult<CreateOutcome> {
        writer::create_entry(&self.root, &self.store, topic, content, tags, ai)
    }

    /// Append a timestamped block to an existing entry. See
    /// [`append_to_entry`].
    pub fn append_to_entry(
        &self,
        entry: &EntryRecord,
        content: &str,
        section: &str,
    ) -> JournalResult<usize> {
        append::append_to_entry(&self.root, &self.store, entry, content, section)
    }

    /// Resolve a search term to an entry.
    ///
    /// The special term `"latest"` (case-insensitive) selects the entry
    /// with the maximum creation timestamp; every other term goes through
    /// the resolver's match precedence.
    pub fn resolve(&self, term: &str) -> JournalResult<Resolution> {
        let index = self.load_index()?;

        if term.eq_ignore_ascii_case(LATEST_TERM) {
            return Ok(match resolver::latest_entry(&index) {
                Some(entry) => Resolution::Found(entry.clone()),
                None => Resolution::NotFound,
            });
        }

        Ok(resolver::find_entry(&index, term))
    }

    /// Absolute path of an entry's markdown file
    pub fn entry_path(&self, entry: &EntryRecord) -> PathBuf {
        self.root.join(&entry.filename)
    }

    /// Read an entry's markdown content, failing with
    /// [`JournalError::MissingEntryFile`] if the file is absent.
    pub fn read_entry(&self, entry: &EntryRecord) -> JournalResult<String> {
        let path = self.entry_path(entry);
        if !path.exists() {
            return Err(JournalError::MissingEntryFile(path));
        }
        Ok(fs::read_to_string(&path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn created(outcome: CreateOutcome) -> EntryRecord {
        match outcome {
            CreateOutcome::Created(record) => record,
            other => panic!("expected Created, got {:?}", other),
        }
    }

    #[test]
    fn test_open_creates_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("journal");
        let journal = Journal::open(&root).unwrap();

        assert!(root.exists());
        assert_eq!(journal.root(), root);
    }

    #[test]
    fn test_resolve_latest() {
        let dir = tempdir().unwrap();
        let journal = Journal::open(dir.path()).unwrap();

        created(journal.create_entry("First", None, &[], None).unwrap());
        let second = created(journal.create_entry("Second", None, &[], None).unwrap());

        match journal.resolve("latest").unwrap() {
            Resolution::Found(entry) => assert_eq!(entry.id, second.id),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_latest_empty_journal() {
        let dir = tempdir().unwrap();
        let journal = Journal::open(dir.path()).unwrap();

        assert_eq!(journal.resolve("latest").unwrap(), Resolution::NotFound);
    }

    #[test]
    fn test_full_session_flow() {
        let dir = tempdir().unwrap();
        let journal = Journal::open(dir.path()).unwrap();

        let record = created(
            journal
                .create_entry("What is Tmux?", None, &["terminal".to_string()], None)
                .unwrap(),
        );

        // Resolve by slug, append, observe the word count move
        let resolved = match journal.resolve("what-is-tmux").unwrap() {
            Resolution::Found(entry) => entry,
            other => panic!("expected Found, got {:?}", other),
        };
        assert_eq!(resolved.id, record.id);

        let new_count = journal
            .append_to_entry(&resolved, "Sessions survive disconnects.", "Q&A")
            .unwrap();
        assert!(new_count > record.word_count);

        let index = journal.load_index().unwrap();
        assert_eq!(index.entry_by_id(record.id).unwrap().word_count, new_count);
        assert_eq!(index.tags["terminal"], 1);
    }

    #[test]
    fn test_read_entry_missing_file() {
        let dir = tempdir().unwrap();
        let journal = Journal::open(dir.path()).unwrap();

        let record = created(journal.create_entry("Doomed", None, &[], None).unwrap());
        std::fs::remove_file(journal.entry_path(&record)).unwrap();

        let err = journal.read_entry(&record).unwrap_err();
        assert!(matches!(err, JournalError::MissingEntryFile(_)));
    }
}
