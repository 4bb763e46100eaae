//! Quill CLI
//!
//! Command-line interface for the Quill journal:
//! - Create entries
//! - Append updates to existing entries
//! - Resolve and show entries
//! - List entries and statistics

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use quill::config::{generate_default_config, Config};
use quill::journal::{format_tags, Journal, Resolution};
use quill::{AiMetadata, Confidence, CreateOutcome, EntryRecord, RiskLevel};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quill")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal Q&A journal")]
#[command(
    long_about = "Quill journals question/answer sessions as dated markdown files,\ntracked in a JSON index. Entries are addressed by id, topic, slug,\nsubstring, or the special term \"latest\"."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Journal root directory (overrides config and QUILL_JOURNAL_DIR)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new entry
    New {
        /// Entry topic
        topic: String,
        /// Tags to attach
        #[arg(short = 'T', long = "tag")]
        tags: Vec<String>,
        /// Entry content (default: read from stdin if piped, else the
        /// session template)
        #[arg(short = 'm', long)]
        content: Option<String>,
        /// AI source name, marks the entry as AI-assisted
        #[arg(long)]
        ai_source: Option<String>,
        /// Quality rating 1-10
        #[arg(long)]
        quality: Option<u8>,
        /// Confidence level (low, medium, high)
        #[arg(long)]
        confidence: Option<Confidence>,
        /// Risk level (low, medium, high)
        #[arg(long)]
        risk: Option<RiskLevel>,
        /// Verification notes
        #[arg(long)]
        verification: Option<String>,
    },

    /// Append a timestamped update to an existing entry
    Append {
        /// Entry id, topic, slug, substring, or "latest"
        term: String,
        /// Update content (default: read from stdin)
        #[arg(short = 'm', long)]
        content: Option<String>,
        /// Target section (default: the configured default section)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Print an entry's markdown content
    Show {
        /// Entry id, topic, slug, substring, or "latest"
        term: String,
    },

    /// Resolve a search term and print the matching record
    Find {
        /// Entry id, topic, slug, substring, or "latest"
        term: String,
    },

    /// List all entries
    List,

    /// Show journal statistics
    Stats,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_default();

    init_logging(&config);

    let root = cli
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.journal.root_dir));
    let journal = Journal::open(&root)
        .with_context(|| format!("failed to open journal at {:?}", root))?;

    match cli.command {
        Commands::New {
            topic,
            tags,
            content,
            ai_source,
            quality,
            confidence,
            risk,
            verification,
        } => {
            let content = content.or_else(read_stdin);

            let ai = ai_source.map(|source| AiMetadata {
                source,
                quality_rating: quality,
                confidence,
                risk_level: risk,
                verification_status: verification,
            });

            let outcome =
                journal.create_entry(&topic, content.as_deref(), &tags, ai.as_ref())?;

            match outcome {
                CreateOutcome::Created(entry) => {
                    println!("Created entry #{}: {}", entry.id, entry.topic);
                    println!("File: {}", journal.entry_path(&entry).display());
                    println!("Tags: {}", format_tags(&entry.tags));
                }
                CreateOutcome::VariationsExhausted(path) => {
                    println!(
                        "Entry already exists and every topic variation is taken: {}",
                        path.display()
                    );
                    println!("No new entry was created.");
                }
            }
        }

        Commands::Append {
            term,
            content,
            section,
        } => {
            let Some(content) = content.or_else(read_stdin) else {
                bail!("no content provided; pass -m or pipe content via stdin");
            };

            let section = section.unwrap_or_else(|| config.journal.default_section.clone());

            let entry = resolve_or_exit(&journal, &term)?;
            let word_count = journal.append_to_entry(&entry, &content, &section)?;

            println!("Appended to: {}", entry.topic);
            println!("File: {}", journal.entry_path(&entry).display());
            println!("Word count: {}", word_count);
        }

        Commands::Show { term } => {
            let entry = resolve_or_exit(&journal, &term)?;
            print!("{}", journal.read_entry(&entry)?);
        }

        Commands::Find { term } => {
            let entry = resolve_or_exit(&journal, &term)?;
            print_entry_line(&entry);
        }

        Commands::List => {
            let index = journal.load_index()?;
            if index.entries.is_empty() {
                println!("No entries yet. Create one with 'quill new <topic>'.");
            }
            for entry in &index.entries {
                print_entry_line(entry);
            }
        }

        Commands::Stats => {
            let index = journal.load_index()?;
            println!("Entries: {}", index.stats.total_entries);
            println!(
                "Last modified: {}",
                index.stats.last_modified.format("%Y-%m-%d %H:%M UTC")
            );

            if !index.tags.is_empty() {
                println!("Tags:");
                for (tag, count) in &index.tags {
                    println!("  {}: {}", tag, count);
                }
            }

            if index.ai_stats.total_ai_assisted > 0 {
                println!("AI-assisted: {}", index.ai_stats.total_ai_assisted);
                println!(
                    "Average quality: {:.1}/10",
                    index.ai_stats.avg_quality_rating
                );
                for (source, count) in &index.ai_stats.sources_used {
                    println!("  {}: {}", source, count);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write config to {:?}", path))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("quill={}", config.logging.level)),
    );

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Resolve a term, exiting with a user-facing message on anything but a
/// unique match.
fn resolve_or_exit(journal: &Journal, term: &str) -> anyhow::Result<EntryRecord> {
    match journal.resolve(term)? {
        Resolution::Found(entry) => Ok(entry),
        Resolution::NotFound => {
            eprintln!("No entry found matching '{}'", term);
            eprintln!("Use 'quill list' to see available entries.");
            std::process::exit(1);
        }
        Resolution::Ambiguous(matches) => {
            eprintln!("Multiple entries match '{}':", term);
            for entry in &matches {
                eprintln!(
                    "  {}: {} ({})",
                    entry.id,
                    entry.topic,
                    entry.created.format("%Y-%m-%d")
                );
            }
            eprintln!("Be more specific or use the entry id.");
            std::process::exit(1);
        }
    }
}

fn print_entry_line(entry: &EntryRecord) {
    println!(
        "{:>4}  {}  {}  [{}]  {} words",
        entry.id,
        entry.created.format("%Y-%m-%d"),
        entry.topic,
        format_tags(&entry.tags),
        entry.word_count
    );
}

/// Read piped stdin content, if any
fn read_stdin() -> Option<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return None;
    }

    let mut buffer = String::new();
    if stdin.read_to_string(&mut buffer).is_err() {
        return None;
    }

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
