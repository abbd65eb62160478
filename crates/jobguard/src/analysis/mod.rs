//! Deterministic fraud scoring for job postings.
//!
//! The pipeline runs the signal extractor once, scores the evidence, assigns a persona when
//! the posting is flagged, and locates every lexicon hit for highlighting. Every step is a
//! pure function of the posting and the static lexicon, so analyses run concurrently
//! without coordination.

mod archetype;
pub mod domain;
mod highlight;
pub mod lexicon;
mod scoring;
mod signals;

#[cfg(test)]
mod tests;

pub use archetype::classify_archetype;
pub use domain::{
    AnalysisError, ArchetypeMatch, CompanyFlag, HeuristicFlags, HighlightSpan, RiskAssessment,
    Signals, SpanCategory,
};
pub use highlight::highlight_evidence;
pub use lexicon::{LexiconError, PatternKind};
pub use scoring::{
    score_signals, RiskBand, RiskFactor, ScoreCard, ScoreComponent, ScoringWeights,
};
pub use signals::{extract_signals, MIN_DESCRIPTION_CHARS};

use tracing::debug;

/// Stateless analyzer that applies the standard scoring rubric to posting text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobPostingAnalyzer {
    weights: ScoringWeights,
}

impl JobPostingAnalyzer {
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn analyze(&self, text: &str) -> RiskAssessment {
        let signals = extract_signals(text);
        let card = score_signals(&signals, &self.weights);

        let archetype = if card.is_scam {
            classify_archetype(&signals, &card.company_flags)
        } else {
            None
        };
        let highlights = highlight_evidence(&signals);

        debug!(
            risk_score = card.risk_score,
            is_scam = card.is_scam,
            confidence = card.confidence,
            band = ?card.band,
            scam_keywords = signals.scam_keywords.len(),
            legitimacy_keywords = signals.legitimacy_keywords.len(),
            patterns = signals.patterns.len(),
            components = ?card.components,
            archetype = archetype.map(|matched| matched.name),
            "job posting analyzed"
        );

        let Signals {
            scam_keywords,
            legitimacy_keywords,
            patterns,
            ..
        } = signals;

        RiskAssessment {
            is_scam: card.is_scam,
            confidence: card.confidence,
            risk_score: card.risk_score,
            scam_keywords,
            legitimate_indicators: legitimacy_keywords,
            patterns,
            company_flags: card.company_flags,
            explanation: card.explanation,
            archetype,
            highlights,
        }
    }
}

/// Analyzes a posting with the standard rubric.
pub fn analyze(text: &str) -> RiskAssessment {
    JobPostingAnalyzer::default().analyze(text)
}

/// Boundary entry point: rejects absent or blank text before analysis.
pub fn analyze_posting(text: Option<&str>) -> Result<RiskAssessment, AnalysisError> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(analyze(text)),
        _ => Err(AnalysisError::MissingText),
    }
}
