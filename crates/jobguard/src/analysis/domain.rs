use serde::{Serialize, Serializer};

use super::lexicon::PatternKind;

/// Independent yes/no heuristics evaluated over the lowercased posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicFlags {
    pub personal_email: bool,
    pub too_short: bool,
    pub no_company_identifier: bool,
    pub no_website: bool,
}

/// Evidence extracted from one posting. Keyword and pattern lists follow lexicon order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signals {
    pub scam_keywords: Vec<&'static str>,
    pub legitimacy_keywords: Vec<&'static str>,
    pub patterns: Vec<PatternKind>,
    pub heuristics: HeuristicFlags,
    pub(crate) lowered: String,
}

impl Signals {
    /// The posting lowercased once during extraction.
    pub fn lowered_text(&self) -> &str {
        &self.lowered
    }

    /// Count of distinct keyword and pattern matches, the basis for confidence.
    pub fn indicator_count(&self) -> usize {
        self.scam_keywords.len() + self.legitimacy_keywords.len() + self.patterns.len()
    }
}

/// Informational observations about the posting's employer. Never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyFlag {
    PersonalEmailDomain,
    NoCompanyWebsite,
    BriefDescription,
}

impl CompanyFlag {
    pub fn label(&self) -> &'static str {
        match self {
            CompanyFlag::PersonalEmailDomain => "Uses personal email domain",
            CompanyFlag::NoCompanyWebsite => "No company website mentioned",
            CompanyFlag::BriefDescription => "Very brief job description",
        }
    }
}

impl Serialize for CompanyFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Persona assigned to a flagged posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchetypeMatch {
    #[serde(rename = "type")]
    pub name: &'static str,
    #[serde(rename = "emoji")]
    pub glyph: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpanCategory {
    #[serde(rename = "scam")]
    Scam,
    #[serde(rename = "legit")]
    Legitimate,
}

/// One located occurrence of a lexicon term. Offsets count characters of the lowercased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub word: &'static str,
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub category: SpanCategory,
}

/// Complete verdict for one posting, serialized in the wire shape clients consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub is_scam: bool,
    pub confidence: u8,
    pub risk_score: u8,
    pub scam_keywords: Vec<&'static str>,
    pub legitimate_indicators: Vec<&'static str>,
    #[serde(skip)]
    pub patterns: Vec<PatternKind>,
    pub company_flags: Vec<CompanyFlag>,
    pub explanation: String,
    #[serde(rename = "personality")]
    pub archetype: Option<ArchetypeMatch>,
    #[serde(rename = "heatmapData")]
    pub highlights: Vec<HighlightSpan>,
}

/// Rejected input at the analysis boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Job text is required")]
    MissingText,
}
