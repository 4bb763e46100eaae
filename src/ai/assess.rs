//! Response curation heuristics
//!
//! Pure text analysis applied to AI responses before they are journaled:
//! a coarse quality score, keyword-based risk classification, and the
//! structured markdown/tag set for a curated entry.

use super::AiResponse;
use crate::journal::RiskLevel;

/// Keywords that mark a topic as high risk
const HIGH_RISK_KEYWORDS: &[&str] = &[
    "security", "password", "crypto", "financial", "medical", "legal",
];

/// Keywords that mark a topic as medium risk
const MEDIUM_RISK_KEYWORDS: &[&str] = &["production", "deploy", "server", "database", "api"];

/// Score a response's quality on a 1-10 scale.
///
/// Starts from a middle score of 5, then adjusts for length, presence of
/// examples, structure (lists or multiple paragraphs), and whether a
/// question is addressed directly.
pub fn assess_quality(content: &str, question: &str) -> u8 {
    let mut score: i32 = 5;

    if content.len() < 50 {
        score -= 2;
    } else if content.len() > 300 {
        score += 1;
    }

    let lower = content.to_lowercase();
    if lower.contains("example") || lower.contains("for instance") {
        score += 1;
    }

    let has_structure = content.matches('\n').count() > 2
        || ["1.", "2.", "-", "*"].iter().any(|m| content.contains(m));
    if has_structure {
        score += 1;
    }

    if question.contains('?') && content.contains('?') {
        score += 1;
    }

    score.clamp(1, 10) as u8
}

/// Classify the risk level of a question/response pair by keyword class.
pub fn detect_risk_level(question: &str, content: &str) -> RiskLevel {
    let text = format!("{} {}", question, content).to_lowercase();

    if HIGH_RISK_KEYWORDS.iter().any(|k| text.contains(k)) {
        RiskLevel::High
    } else if MEDIUM_RISK_KEYWORDS.iter().any(|k| text.contains(k)) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Build the structured markdown body for a curated response: metadata
/// block, the AI response, then optional reflection and verification
/// sections.
pub fn curated_content(response: &AiResponse) -> String {
    let mut parts = vec![
        format!("**Source:** {}", response.source),
        format!("**Quality:** {}/10", response.quality_score),
        format!("**Confidence:** {}", response.confidence.title()),
        format!("**Risk Level:** {}", response.risk_level.title()),
        String::new(),
        "## AI Response".to_string(),
        String::new(),
        response.content.clone(),
        String::new(),
    ];

    if !response.reflection.is_empty() {
        parts.push("## My Reflection".to_string());
        parts.push(String::new());
        parts.push(response.reflection.clone());
        parts.push(String::new());
    }

    if response.verification_status != "untested" {
        parts.push("## Verification".to_string());
        parts.push(String::new());
        parts.push(format!("Status: {}", response.verification_status));
        parts.push(String::new());
    }

    parts.join("\n")
}

/// Tag set for a curated response: the base question/ai-assisted pair, the
/// lowercased source name, and a high-risk marker when warranted.
pub fn curated_tags(response: &AiResponse) -> Vec<String> {
    let mut tags = vec!["question".to_string(), "ai-assisted".to_string()];

    if !response.source.is_empty() {
        tags.push(response.source.to_lowercase());
    }

    if response.risk_level == RiskLevel::High {
        tags.push("high-risk".to_string());
    }

    tags
}
