//! Core data types for the journal
//!
//! This module defines the persisted index document and its pieces:
//! - `Index`: the single JSON document tracking all entries and stats
//! - `EntryRecord`: one journaled note's metadata
//! - `AiStats` / `IndexStats`: aggregate bookkeeping
//! - `AiMetadata`, `Confidence`, `RiskLevel`: AI provenance types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Current index format version
pub const INDEX_VERSION: u32 = 1;

/// The journal index: a single JSON document holding all entry metadata
/// and aggregate statistics.
///
/// Entries are append-only by id. Tag counts and AI stats are maintained
/// additively on every entry creation, never rebuilt by rescanning files,
/// so they can drift if entries are edited outside this tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Index {
    /// Format version
    pub version: u32,
    /// When the index was first created
    pub created: DateTime<Utc>,
    /// All entry records, ordered by id
    pub entries: Vec<EntryRecord>,
    /// Tag name -> occurrence count across all entries
    #[serde(default)]
    pub tags: BTreeMap<String, u64>,
    /// Aggregate AI-assistance counters
    #[serde(default)]
    pub ai_stats: AiStats,
    /// Derived bookkeeping, updated on every save
    pub stats: IndexStats,
}

impl Index {
    /// Create a fresh, empty index stamped with the current time
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            version: INDEX_VERSION,
            created: now,
            entries: Vec::new(),
            tags: BTreeMap::new(),
            ai_stats: AiStats::default(),
            stats: IndexStats {
                total_entries: 0,
                last_modified: now,
            },
        }
    }

    /// The id the next created entry will receive.
    ///
    /// Ids form a dense sequence starting at 1 in insertion order and are
    /// never reused or reassigned.
    pub fn next_id(&self) -> u64 {
        self.entries.len() as u64 + 1
    }

    /// Find a record by id
    pub fn entry_by_id(&self, id: u64) -> Option<&EntryRecord> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Find a record by id, mutably
    pub fn entry_by_id_mut(&mut self, id: u64) -> Option<&mut EntryRecord> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Bump tag counts additively for one entry's tag list
    pub fn record_tags(&mut self, tags: &[String]) {
        for tag in tags {
            *self.tags.entry(tag.clone()).or_insert(0) += 1;
        }
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata for one journaled entry, backed by one markdown file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryRecord {
    /// Unique, dense id assigned at creation (`entries.len() + 1`)
    pub id: u64,
    /// Free-text title, the primary human-facing identifier
    pub topic: String,
    /// Normalized form of the topic (see [`crate::journal::slugify`])
    pub slug: String,
    /// Markdown file path relative to the journal root,
    /// `entries/<YYYY>/<MM>/<YYYYMMDD>-<slug>.md`
    pub filename: String,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Tag list (order preserved, not significant)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whitespace-delimited token count of the file content,
    /// recomputed on every mutation
    pub word_count: usize,

    /// AI source names, when the entry was AI-assisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_sources: Option<Vec<String>>,
    /// Quality rating 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_rating: Option<u8>,
    /// Confidence in the recorded information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    /// Risk level of the topic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    /// Free-text verification notes, or "untested"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<String>,
}

/// Aggregate AI-assistance counters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AiStats {
    /// Number of AI-assisted entries
    pub total_ai_assisted: u64,
    /// Source name -> number of entries it assisted
    pub sources_used: BTreeMap<String, u64>,
    /// Running weighted mean of quality ratings
    pub avg_quality_rating: f64,
}

impl AiStats {
    /// Fold one AI-assisted entry into the counters.
    ///
    /// The average is maintained as a running weighted mean:
    /// `new_avg = (old_avg * (n - 1) + rating) / n`.
    pub fn record(&mut self, source: &str, rating: u8) {
        self.total_ai_assisted += 1;
        *self.sources_used.entry(source.to_string()).or_insert(0) += 1;

        let n = self.total_ai_assisted as f64;
        self.avg_quality_rating = (self.avg_quality_rating * (n - 1.0) + rating as f64) / n;
    }
}

/// Derived index bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexStats {
    /// Total number of entries
    pub total_entries: u64,
    /// Stamped to the current time on every save
    pub last_modified: DateTime<Utc>,
}

/// AI provenance supplied when creating an AI-assisted entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AiMetadata {
    /// Name of the AI source (e.g. "ChatGPT")
    pub source: String,
    /// Quality rating 1-10
    pub quality_rating: Option<u8>,
    /// Confidence in the response
    pub confidence: Option<Confidence>,
    /// Risk level of the topic
    pub risk_level: Option<RiskLevel>,
    /// Verification notes
    pub verification_status: Option<String>,
}

impl AiMetadata {
    /// Rating used for the running average when none was supplied
    pub const DEFAULT_RATING: u8 = 5;

    /// Rating to fold into `ai_stats`
    pub fn effective_rating(&self) -> u8 {
        self.quality_rating.unwrap_or(Self::DEFAULT_RATING)
    }
}

/// How confident the author is in the recorded information
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    #[default]
    Medium,
    High,
}

impl Confidence {
    /// Title-cased label for markdown rendering
    pub fn title(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High => write!(f, "high"),
        }
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Confidence::Low),
            "medium" => Ok(Confidence::Medium),
            "high" => Ok(Confidence::High),
            other => Err(format!("unknown confidence level: {}", other)),
        }
    }
}

/// Risk classification of a topic
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Title-cased label for markdown rendering
    pub fn title(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(format!("unknown risk level: {}", other)),
        }
    }
}
