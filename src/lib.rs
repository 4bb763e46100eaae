//! # Quill
//!
//! Personal Q&A journal - journals question/answer sessions (optionally
//! AI-assisted) as dated markdown files tracked in a single JSON index.
//!
//! ## Features
//!
//! - **Dated markdown entries**: one file per note under
//!   `entries/<YYYY>/<MM>/`, named by date and topic slug
//! - **Denormalized JSON index**: entry metadata, tag counts, and AI
//!   statistics in one pretty-printed `index.json`
//! - **Deterministic lookup**: resolve an id, topic, slug, or substring to
//!   exactly one entry with a fixed match precedence
//! - **Collision-safe creation**: same-day duplicate topics retry through
//!   a fixed list of topic variations instead of overwriting
//! - **AI curation seam**: provider-agnostic response scoring, risk
//!   classification, and curated entry rendering
//!
//! ## Modules
//!
//! - [`journal`]: the resolution + synchronization core
//! - [`ai`]: the AI collaborator seam and curation heuristics
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quill::journal::{CreateOutcome, Journal, Resolution};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let journal = Journal::open("/home/me/quill-journal")?;
//!
//!     // Create an entry (default session template)
//!     let outcome = journal.create_entry(
//!         "What is Tmux?",
//!         None,
//!         &["terminal".to_string()],
//!         None,
//!     )?;
//!
//!     // Resolve it back later by id, topic, slug, or substring
//!     if let Resolution::Found(entry) = journal.resolve("what-is-tmux")? {
//!         journal.append_to_entry(&entry, "Sessions survive disconnects.", "Q&A")?;
//!     }
//!
//!     if let CreateOutcome::Created(entry) = outcome {
//!         println!("created entry #{}", entry.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod config;
pub mod journal;

// Re-export top-level types for convenience
pub use journal::{
    slugify, AiMetadata, AiStats, Confidence, CreateOutcome, EntryRecord, Index, IndexStats,
    IndexStore, Journal, JournalError, JournalResult, Resolution, RiskLevel,
};

pub use ai::{AiError, AiProvider, AiResponse};

pub use config::{Config, ConfigError, JournalConfig, LoggingConfig};
