//! Entry writer - creates new markdown entry files and index records
//!
//! Filename collisions on the same day are handled by generating a fixed
//! ordered list of topic variations and retrying with the first variation
//! whose filename is free. When every variation also collides, creation
//! degrades to returning the pre-existing path without touching the index.

use crate::journal::error::JournalResult;
use crate::journal::slug::slugify;
use crate::journal::store::IndexStore;
use crate::journal::template;
use crate::journal::types::{AiMetadata, EntryRecord};
use chrono::{DateTime, Local, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of an entry creation attempt.
///
/// Exhausting every topic variation is a defined terminal fallback, not an
/// error: the caller receives the pre-existing path and no new record.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// A file and index record were created
    Created(EntryRecord),
    /// Every generated variation collided; nothing was written
    VariationsExhausted(PathBuf),
}

/// Relative path for an entry created on the given date:
/// `entries/<YYYY>/<MM>/<YYYYMMDD>-<slug>.md`
pub fn entry_rel_path(slug: &str, date: &DateTime<Local>) -> String {
    format!(
        "entries/{}/{}/{}-{}.md",
        date.format("%Y"),
        date.format("%m"),
        date.format("%Y%m%d"),
        slug
    )
}

/// Fixed, ordered topic variations tried when a filename collides.
///
/// Replacements are literal and case-sensitive; a "what is" phrasing is
/// toggled between plain and "what is an" forms, then "detailed" /
/// "advanced" / "explained" suffixes are tried.
fn topic_variations(topic: &str) -> Vec<String> {
    let mut variations = vec![
        topic
            .replace("what is", "what is an")
            .replace("what is an an", "what is an"),
        topic.replace("what is an", "what is"),
        format!("{} detailed", topic),
        format!("{} advanced", topic),
    ];

    if topic.contains('?') {
        variations.push(topic.replace('?', " explained?"));
    } else {
        variations.push(format!("{} explained", topic));
    }

    variations
}

/// Create a new journal entry: one markdown file plus one index record.
///
/// Effects are sequential, file first and index second; there is no
/// rollback if the file write succeeds but the index save fails.
pub fn create_entry(
    root: &Path,
    store: &IndexStore,
    topic: &str,
    content: Option<&str>,
    tags: &[String],
    ai: Option<&AiMetadata>,
) -> JournalResult<CreateOutcome> {
    let now = Local::now();
    let slug = slugify(topic);
    let rel_path = entry_rel_path(&slug, &now);
    let entry_path = root.join(&rel_path);

    if entry_path.exists() {
        tracing::warn!(topic, path = ?entry_path, "entry already exists, trying topic variations");

        for variation in topic_variations(topic) {
            let var_path = root.join(entry_rel_path(&slugify(&variation), &now));
            if !var_path.exists() {
                tracing::info!(topic = %variation, "retrying with topic variation");
                return create_entry(root, store, &variation, content, tags, ai);
            }
        }

        tracing::warn!(topic, "all topic variations collide, keeping existing entry");
        return Ok(CreateOutcome::VariationsExhausted(entry_path));
    }

    if let Some(parent) = entry_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let rendered = template::render_entry(topic, content, tags, ai, &now);
    fs::write(&entry_path, &rendered)?;

    let mut index = store.load()?;
    let record = EntryRecord {
        id: index.next_id(),
        topic: topic.to_string(),
        slug,
        filename: rel_path,
        created: Utc::now(),
        tags: tags.to_vec(),
        word_count: rendered.split_whitespace().count(),
        ai_sources: ai.map(|m| vec![m.source.clone()]),
        quality_rating: ai.and_then(|m| m.quality_rating),
        confidence: ai.map(|m| m.confidence.unwrap_or_default()),
        risk_level: ai.map(|m| m.risk_level.unwrap_or_default()),
        verification_status: ai.map(|m| {
            m.verification_status
                .clone()
                .unwrap_or_else(|| "untested".to_string())
        }),
    };

    index.record_tags(tags);
    if let Some(meta) = ai {
        index.ai_stats.record(&meta.source, meta.effective_rating());
    }
    index.entries.push(record.clone());
    index.stats.total_entries += 1;
    store.save(&mut index)?;

    tracing::info!(id = record.id, topic, file = %record.filename, "entry created");
    Ok(CreateOutcome::Created(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::types::Confidence;
    use tempfile::tempdir;

    fn setup() -> (tempfile::TempDir, IndexStore) {
        let dir = tempdir().unwrap();
        let store = IndexStore::open(dir.path());
        (dir, store)
    }

    fn created(outcome: CreateOutcome) -> EntryRecord {
        match outcome {
            CreateOutcome::Created(record) => record,
            other => panic!("expected Created, got {:?}", other),
        }
    }

    #[test]
    fn test_create_assigns_dense_ids_and_distinct_files() {
        let (dir, store) = setup();

        let topics = ["First Topic", "Second Topic", "Third Topic"];
        for (i, topic) in topics.iter().enumerate() {
            let record =
                created(create_entry(dir.path(), &store, topic, None, &[], None).unwrap());
            assert_eq!(record.id, i as u64 + 1);
            assert!(dir.path().join(&record.filename).exists());
        }

        let index = store.load().unwrap();
        assert_eq!(index.entries.len(), 3);
        assert_eq!(index.stats.total_entries, 3);

        let ids: Vec<u64> = index.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filename_layout() {
        let (dir, store) = setup();
        let record =
            created(create_entry(dir.path(), &store, "What is Tmux?", None, &[], None).unwrap());

        assert_eq!(record.slug, "what-is-tmux");
        let now = Local::now();
        assert_eq!(
            record.filename,
            format!(
                "entries/{}/{}/{}-what-is-tmux.md",
                now.format("%Y"),
                now.format("%m"),
                now.format("%Y%m%d")
            )
        );
    }

    #[test]
    fn test_duplicate_topic_creates_variation() {
        let (dir, store) = setup();

        let first = created(create_entry(dir.path(), &store, "Tmux Basics", None, &[], None).unwrap());
        let second =
            created(create_entry(dir.path(), &store, "Tmux Basics", None, &[], None).unwrap());

        // First free variation is "<topic> detailed"
        assert_eq!(second.topic, "Tmux Basics detailed");
        assert_eq!(second.slug, "tmux-basics-detailed");
        assert_ne!(first.filename, second.filename);
        assert!(dir.path().join(&first.filename).exists());
        assert!(dir.path().join(&second.filename).exists());

        let index = store.load().unwrap();
        assert_eq!(index.entries.len(), 2);
    }

    #[test]
    fn test_what_is_variation_order() {
        let (dir, store) = setup();

        created(create_entry(dir.path(), &store, "what is tmux?", None, &[], None).unwrap());
        let second =
            created(create_entry(dir.path(), &store, "what is tmux?", None, &[], None).unwrap());

        assert_eq!(second.topic, "what is an tmux?");
    }

    #[test]
    fn test_all_variations_exhausted_returns_existing_path() {
        let (dir, store) = setup();

        // "Note" collides with its own first two variations, so each retry
        // consumes one suffix variation until none are left.
        for _ in 0..4 {
            created(create_entry(dir.path(), &store, "Note", None, &[], None).unwrap());
        }

        let outcome = create_entry(dir.path(), &store, "Note", None, &[], None).unwrap();
        match outcome {
            CreateOutcome::VariationsExhausted(path) => {
                assert!(path.exists());
                assert!(path.to_string_lossy().ends_with("-note.md"));
            }
            other => panic!("expected VariationsExhausted, got {:?}", other),
        }

        // No new record was created
        let index = store.load().unwrap();
        assert_eq!(index.entries.len(), 4);
    }

    #[test]
    fn test_tag_counts_are_additive() {
        let (dir, store) = setup();

        created(
            create_entry(
                dir.path(),
                &store,
                "X",
                None,
                &["a".to_string(), "b".to_string()],
                None,
            )
            .unwrap(),
        );
        created(create_entry(dir.path(), &store, "Y", None, &["b".to_string()], None).unwrap());

        let index = store.load().unwrap();
        assert_eq!(index.tags["a"], 1);
        assert_eq!(index.tags["b"], 2);
    }

    #[test]
    fn test_ai_metadata_recorded() {
        let (dir, store) = setup();

        let ai = AiMetadata {
            source: "ChatGPT".to_string(),
            quality_rating: Some(8),
            confidence: Some(Confidence::High),
            risk_level: None,
            verification_status: None,
        };
        let record = created(
            create_entry(dir.path(), &store, "AI Topic", Some("body"), &[], Some(&ai)).unwrap(),
        );

        assert_eq!(record.ai_sources, Some(vec!["ChatGPT".to_string()]));
        assert_eq!(record.quality_rating, Some(8));
        assert_eq!(record.verification_status, Some("untested".to_string()));

        let index = store.load().unwrap();
        assert_eq!(index.ai_stats.total_ai_assisted, 1);
        assert_eq!(index.ai_stats.sources_used["ChatGPT"], 1);
        assert!((index.ai_stats.avg_quality_rating - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_word_count_matches_rendered_file() {
        let (dir, store) = setup();
        let record = created(
            create_entry(dir.path(), &store, "Counted", Some("one two three"), &[], None).unwrap(),
        );

        let on_disk = std::fs::read_to_string(dir.path().join(&record.filename)).unwrap();
        assert_eq!(record.word_count, on_disk.split_whitespace().count());
    }
}
