//! Append engine - inserts timestamped updates into existing entries
//!
//! Locates an insertion point inside the entry's section structure and
//! rewrites the whole file, then brings the index's derived word count
//! back in sync.

use crate::journal::error::{JournalError, JournalResult};
use crate::journal::store::IndexStore;
use crate::journal::template;
use crate::journal::types::EntryRecord;
use chrono::Local;
use std::fs;
use std::path::Path;

/// Heading the Q&A section anchors on, including the trailing newline so
/// insertion lands on the following line.
const QA_HEADING: &str = "## Questions & Answers\n";
/// Heading a synthesized Q&A section is placed before
const FOLLOWUP_HEADING: &str = "## Follow-up Actions";

/// Append a timestamped content block to an existing entry.
///
/// For the `"Q&A"`/`"qa"` section (case-insensitive) the block is inserted
/// immediately after the first "Questions & Answers" heading; if that
/// heading is absent but "Follow-up Actions" exists, a Questions & Answers
/// heading is synthesized immediately before it; otherwise the block goes
/// to the end of the file. Any other section value appends to the end
/// unconditionally.
///
/// Returns the updated whitespace-delimited word count, which is also
/// written back to the entry's index record. File first, index second; an
/// interruption between the two leaves a documented divergence.
pub fn append_to_entry(
    root: &Path,
    store: &IndexStore,
    entry: &EntryRecord,
    content: &str,
    section: &str,
) -> JournalResult<usize> {
    let entry_path = root.join(&entry.filename);
    if !entry_path.exists() {
        return Err(JournalError::MissingEntryFile(entry_path));
    }

    let current = fs::read_to_string(&entry_path)?;
    let block = template::update_block(content, &Local::now());

    let updated = if section.eq_ignore_ascii_case("q&a") || section.eq_ignore_ascii_case("qa") {
        insert_into_qa_section(&current, &block)
    } else {
        format!("{}{}", current, block)
    };

    fs::write(&entry_path, &updated)?;

    let word_count = updated.split_whitespace().count();
    let mut index = store.load()?;
    if let Some(record) = index.entry_by_id_mut(entry.id) {
        record.word_count = word_count;
    }
    store.save(&mut index)?;

    tracing::info!(id = entry.id, words = word_count, "update appended");
    Ok(word_count)
}

/// Insert a block into the Q&A section structure, falling back to a
/// synthesized heading or a plain end-of-file append.
fn insert_into_qa_section(current: &str, block: &str) -> String {
    if let Some(pos) = current.find(QA_HEADING) {
        let insert_at = pos + QA_HEADING.len();
        format!("{}{}\n{}", &current[..insert_at], block, &current[insert_at..])
    } else if let Some(pos) = current.find(FOLLOWUP_HEADING) {
        format!(
            "{}## Questions & Answers{}\n{}",
            &current[..pos],
            block,
            &current[pos..]
        )
    } else {
        format!("{}{}", current, block)
    }
}
