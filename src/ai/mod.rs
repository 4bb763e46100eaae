//! AI collaborator seam
//!
//! The journal consumes an opaque "ask a question, get text" capability.
//! This module defines that seam ([`AiProvider`]) plus the pure curation
//! logic applied to responses before they are saved: quality scoring,
//! risk-level detection, and curated entry content/tag building. No
//! provider implementation ships with this crate; front ends supply one.

mod assess;

pub use assess::{assess_quality, curated_content, curated_tags, detect_risk_level};

use crate::journal::{AiMetadata, Confidence, RiskLevel};
use thiserror::Error;

/// Errors surfaced by an AI provider
#[derive(Error, Debug)]
pub enum AiError {
    /// The provider is not configured (e.g. missing API key)
    #[error("AI provider not configured: {0}")]
    NotConfigured(String),

    /// The provider failed to produce a response
    #[error("AI provider error: {0}")]
    Provider(String),
}

/// An AI response together with its curation metadata
#[derive(Debug, Clone, PartialEq)]
pub struct AiResponse {
    /// The response text
    pub content: String,
    /// Name of the source that produced it (e.g. "ChatGPT")
    pub source: String,
    /// Quality score 1-10, see [`assess_quality`]
    pub quality_score: u8,
    /// Author confidence, adjusted during curation
    pub confidence: Confidence,
    /// Topic risk classification, see [`detect_risk_level`]
    pub risk_level: RiskLevel,
    /// Verification notes, "untested" until the author verifies
    pub verification_status: String,
    /// Optional critical-thinking reflection added during curation
    pub reflection: String,
}

impl AiResponse {
    /// Build a response for a question, scoring quality and risk from the
    /// text itself.
    pub fn new(content: impl Into<String>, source: impl Into<String>, question: &str) -> Self {
        let content = content.into();
        let quality_score = assess_quality(&content, question);
        let risk_level = detect_risk_level(question, &content);
        Self {
            content,
            source: source.into(),
            quality_score,
            confidence: Confidence::Medium,
            risk_level,
            verification_status: "untested".to_string(),
            reflection: String::new(),
        }
    }

    /// The metadata recorded on the index entry for this response
    pub fn metadata(&self) -> AiMetadata {
        AiMetadata {
            source: self.source.clone(),
            quality_rating: Some(self.quality_score),
            confidence: Some(self.confidence),
            risk_level: Some(self.risk_level),
            verification_status: Some(self.verification_status.clone()),
        }
    }
}

/// Opaque text-generation capability consumed by front ends.
///
/// Implementations live outside this crate; the journal core never speaks
/// any provider protocol itself.
pub trait AiProvider {
    /// Human-facing source name recorded in entries and stats
    fn name(&self) -> &str;

    /// Ask a question, producing a curated-ready response
    fn ask(&self, question: &str) -> Result<AiResponse, AiError>;
}
