//! Markdown rendering for entry files
//!
//! Produces the entry header block, the default session template used when
//! no content is supplied, and the timestamped update blocks inserted by
//! the append engine.

use crate::journal::types::AiMetadata;
use chrono::{DateTime, Local};

/// Default body used when an entry is created without content.
///
/// The "Questions & Answers" and "Follow-up Actions" headings double as
/// insertion anchors for the append engine.
pub const DEFAULT_TEMPLATE: &str = "## Key Points\n\
- [Add your key insights here]\n\
\n\
## Questions & Answers\n\
\n\
[Add your Q&A content here]\n\
\n\
## Follow-up Actions\n\
- [ ] [Add any next steps]\n\
\n\
---\n\
\n\
## Full Session Content\n\
\n\
[Add your detailed content here]\n\
\n\
---\n\
\n\
## Reflection\n\
[Add your thoughts and reflections here]";

/// Render a complete entry file: header, metadata lines, then the caller
/// content or the default session template.
pub fn render_entry(
    topic: &str,
    content: Option<&str>,
    tags: &[String],
    ai: Option<&AiMetadata>,
    now: &DateTime<Local>,
) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!("# {}", topic));
    sections.push(String::new());

    sections.push(format!("**Date:** {}", now.format("%B %d, %Y")));
    sections.push(format!("**Time:** {}", now.format("%I:%M %p")));
    sections.push(format!("**Tags:** {}", format_tags(tags)));

    if let Some(ai) = ai {
        if !ai.source.is_empty() {
            sections.push(format!("**AI Source:** {}", ai.source));
        }
        if let Some(rating) = ai.quality_rating {
            sections.push(format!("**Quality Rating:** {}/10", rating));
        }
        if let Some(confidence) = ai.confidence {
            sections.push(format!("**Confidence:** {}", confidence.title()));
        }
        if let Some(risk) = ai.risk_level {
            sections.push(format!("**Risk Level:** {}", risk.title()));
        }
    }

    sections.push(String::new());

    match content {
        Some(body) if !body.is_empty() => sections.push(body.to_string()),
        _ => sections.push(DEFAULT_TEMPLATE.to_string()),
    }

    sections.join("\n")
}

/// Format a dated update block for appending to an existing entry
pub fn update_block(content: &str, now: &DateTime<Local>) -> String {
    format!("\n### Update - {}\n\n{}\n", now.format("%I:%M %p"), content)
}

/// Comma-joined tag list, or "untagged"
pub fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        "untagged".to_string()
    } else {
        tags.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::types::{Confidence, RiskLevel};

    #[test]
    fn test_render_with_default_template() {
        let now = Local::now();
        let rendered = render_entry("What is Tmux?", None, &[], None, &now);

        assert!(rendered.starts_with("# What is Tmux?\n"));
        assert!(rendered.contains("**Tags:** untagged"));
        assert!(rendered.contains("## Questions & Answers"));
        assert!(rendered.contains("## Follow-up Actions"));
        assert!(rendered.contains("## Reflection"));
    }

    #[test]
    fn test_render_with_content_skips_template() {
        let now = Local::now();
        let rendered = render_entry(
            "Topic",
            Some("Just these notes."),
            &["a".to_string(), "b".to_string()],
            None,
            &now,
        );

        assert!(rendered.contains("**Tags:** a, b"));
        assert!(rendered.contains("Just these notes."));
        assert!(!rendered.contains("## Key Points"));
    }

    #[test]
    fn test_render_ai_metadata_lines() {
        let now = Local::now();
        let ai = AiMetadata {
            source: "ChatGPT".to_string(),
            quality_rating: Some(8),
            confidence: Some(Confidence::High),
            risk_level: Some(RiskLevel::Medium),
            verification_status: None,
        };
        let rendered = render_entry("Topic", Some("body"), &[], Some(&ai), &now);

        assert!(rendered.contains("**AI Source:** ChatGPT"));
        assert!(rendered.contains("**Quality Rating:** 8/10"));
        assert!(rendered.contains("**Confidence:** High"));
        assert!(rendered.contains("**Risk Level:** Medium"));
    }

    #[test]
    fn test_update_block_shape() {
        let now = Local::now();
        let block = update_block("New insight", &now);

        assert!(block.starts_with("\n### Update - "));
        assert!(block.ends_with("\n\nNew insight\n"));
    }
}
