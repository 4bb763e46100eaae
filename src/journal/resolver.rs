//! Entry resolver - precedence-ordered lookup of a user-typed search term
//!
//! Maps a partial, possibly ambiguous textual reference to exactly one
//! entry record. Match precedence, first non-empty result wins:
//!
//! 1. Integer parse of the term matched against entry ids
//! 2. Case-insensitive exact topic match
//! 3. Case-insensitive exact slug match
//! 4. Case-insensitive substring match within topics
//!
//! The special term `"latest"` is handled by [`latest_entry`] instead and
//! bypasses this precedence chain entirely.

use crate::journal::types::{EntryRecord, Index};

/// Outcome of resolving a search term.
///
/// Resolution outcomes are data, not errors: callers must branch on all
/// three cases. `Ambiguous` carries the full candidate list so the caller
/// can display id, topic, and creation date for disambiguation.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Exactly one entry matched
    Found(EntryRecord),
    /// Nothing matched
    NotFound,
    /// Several entries matched the substring search
    Ambiguous(Vec<EntryRecord>),
}

/// Resolve a search term against the index.
pub fn find_entry(index: &Index, term: &str) -> Resolution {
    // 1. Exact id match
    if let Ok(id) = term.parse::<u64>() {
        if let Some(entry) = index.entry_by_id(id) {
            return Resolution::Found(entry.clone());
        }
    }

    let term_lower = term.to_lowercase();

    // 2. Exact topic match
    if let Some(entry) = index
        .entries
        .iter()
        .find(|e| e.topic.to_lowercase() == term_lower)
    {
        return Resolution::Found(entry.clone());
    }

    // 3. Exact slug match
    if let Some(entry) = index.entries.iter().find(|e| e.slug == term_lower) {
        return Resolution::Found(entry.clone());
    }

    // 4. Substring topic match
    let mut matches: Vec<EntryRecord> = index
        .entries
        .iter()
        .filter(|e| e.topic.to_lowercase().contains(&term_lower))
        .cloned()
        .collect();

    match matches.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Found(matches.remove(0)),
        _ => Resolution::Ambiguous(matches),
    }
}

/// The most recently created entry: maximum `created`, ties broken by
/// highest id (deterministic).
pub fn latest_entry(index: &Index) -> Option<&EntryRecord> {
    index.entries.iter().max_by_key(|e| (e.created, e.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(id: u64, topic: &str, created_secs: i64) -> EntryRecord {
        EntryRecord {
            id,
            topic: topic.to_string(),
            slug: crate::journal::slugify(topic),
            filename: format!(
                "entries/2025/01/20250101-{}.md",
                crate::journal::slugify(topic)
            ),
            created: Utc.timestamp_opt(created_secs, 0).unwrap(),
            tags: Vec::new(),
            word_count: 0,
            ai_sources: None,
            quality_rating: None,
            confidence: None,
            risk_level: None,
            verification_status: None,
        }
    }

    fn index_with(entries: Vec<EntryRecord>) -> Index {
        let mut index = Index::new();
        index.entries = entries;
        index
    }

    #[test]
    fn test_id_match_wins_over_topic_substring() {
        // Entry 2's topic contains the literal string "1", but the id
        // parse must win.
        let index = index_with(vec![entry(1, "Terminal Commands", 100), entry(2, "1 weird trick", 200)]);

        match find_entry(&index, "1") {
            Resolution::Found(e) => assert_eq!(e.id, 1),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_or_unknown_id_falls_through() {
        let index = index_with(vec![entry(1, "42 things about Rust", 100)]);

        // "42" parses but no entry has id 42; substring match picks it up.
        match find_entry(&index, "42") {
            Resolution::Found(e) => assert_eq!(e.id, 1),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_topic_match_case_insensitive() {
        let index = index_with(vec![
            entry(1, "Terminal Commands", 100),
            entry(2, "Terminal Commands Advanced", 200),
        ]);

        // Exact topic match beats the substring stage, which would be
        // ambiguous here.
        match find_entry(&index, "terminal commands") {
            Resolution::Found(e) => assert_eq!(e.id, 1),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_slug_match() {
        let index = index_with(vec![entry(1, "What is Tmux?", 100)]);

        match find_entry(&index, "what-is-tmux") {
            Resolution::Found(e) => assert_eq!(e.id, 1),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_single_substring_match() {
        let index = index_with(vec![
            entry(1, "Terminal Commands", 100),
            entry(2, "Rust Ownership", 200),
        ]);

        match find_entry(&index, "owner") {
            Resolution::Found(e) => assert_eq!(e.id, 2),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_ambiguous_substring_match_carries_candidates() {
        let index = index_with(vec![
            entry(1, "Rust Ownership", 100),
            entry(2, "Rust Lifetimes", 200),
            entry(3, "Terminal Commands", 300),
        ]);

        match find_entry(&index, "rust") {
            Resolution::Ambiguous(matches) => {
                assert_eq!(matches.len(), 2);
                assert!(matches.iter().any(|e| e.id == 1));
                assert!(matches.iter().any(|e| e.id == 2));
            }
            other => panic!("expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found() {
        let index = index_with(vec![entry(1, "Terminal Commands", 100)]);
        assert_eq!(find_entry(&index, "nonexistent"), Resolution::NotFound);
    }

    #[test]
    fn test_latest_by_created() {
        let index = index_with(vec![
            entry(1, "Oldest", 100),
            entry(2, "Newest", 300),
            entry(3, "Middle", 200),
        ]);

        assert_eq!(latest_entry(&index).unwrap().id, 2);
    }

    #[test]
    fn test_latest_tie_breaks_by_highest_id() {
        let index = index_with(vec![entry(1, "A", 100), entry(2, "B", 100)]);
        assert_eq!(latest_entry(&index).unwrap().id, 2);
    }

    #[test]
    fn test_latest_empty_index() {
        let index = Index::new();
        assert!(latest_entry(&index).is_none());
    }
}
