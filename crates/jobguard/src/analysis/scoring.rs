use serde::Serialize;

use super::domain::{CompanyFlag, Signals};

/// Fixed weights of the risk rubric.
///
/// These mirror the values the product has always shipped with. They carry no statistical
/// calibration and can be tuned per build, but never at runtime, so the only instance is
/// [`ScoringWeights::STANDARD`]. `confidence_floor <= confidence_ceiling` holds for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub(crate) scam_keyword: i32,
    pub(crate) high_risk_pattern: i32,
    pub(crate) legitimacy_keyword: i32,
    pub(crate) personal_email: i32,
    pub(crate) too_short: i32,
    pub(crate) no_company_identifier: i32,
    pub(crate) scam_threshold: u8,
    pub(crate) confidence_floor: u8,
    pub(crate) confidence_ceiling: u8,
    pub(crate) confidence_step: u8,
}

impl ScoringWeights {
    pub const STANDARD: Self = Self {
        scam_keyword: 15,
        high_risk_pattern: 25,
        legitimacy_keyword: -10,
        personal_email: 10,
        too_short: 15,
        no_company_identifier: 10,
        scam_threshold: 60,
        confidence_floor: 60,
        confidence_ceiling: 95,
        confidence_step: 8,
    };
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Rubric factor behind a score contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    ScamKeywords,
    HighRiskPatterns,
    LegitimacyKeywords,
    PersonalEmail,
    BriefDescription,
    MissingCompanyIdentifier,
}

/// Discrete contribution to a score, kept for audit logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub factor: RiskFactor,
    pub points: i32,
}

/// Explanation tier chosen from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    High,
    Medium,
    Low,
}

impl RiskBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => RiskBand::High,
            40..=69 => RiskBand::Medium,
            _ => RiskBand::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    pub risk_score: u8,
    pub is_scam: bool,
    pub confidence: u8,
    pub band: RiskBand,
    pub company_flags: Vec<CompanyFlag>,
    pub explanation: String,
    pub components: Vec<ScoreComponent>,
}

pub fn score_signals(signals: &Signals, weights: &ScoringWeights) -> ScoreCard {
    let mut components = Vec::new();
    let mut push = |factor: RiskFactor, points: i32| {
        if points != 0 {
            components.push(ScoreComponent { factor, points });
        }
    };

    push(
        RiskFactor::ScamKeywords,
        weights.scam_keyword * signals.scam_keywords.len() as i32,
    );
    push(
        RiskFactor::HighRiskPatterns,
        weights.high_risk_pattern * signals.patterns.len() as i32,
    );
    push(
        RiskFactor::LegitimacyKeywords,
        weights.legitimacy_keyword * signals.legitimacy_keywords.len() as i32,
    );

    let heuristics = signals.heuristics;
    if heuristics.personal_email {
        push(RiskFactor::PersonalEmail, weights.personal_email);
    }
    if heuristics.too_short {
        push(RiskFactor::BriefDescription, weights.too_short);
    }
    if heuristics.no_company_identifier {
        push(
            RiskFactor::MissingCompanyIdentifier,
            weights.no_company_identifier,
        );
    }

    let raw: i32 = components.iter().map(|component| component.points).sum();
    let risk_score = raw.clamp(0, 100) as u8;
    let is_scam = risk_score >= weights.scam_threshold;

    let evidence = signals.indicator_count().min(u8::MAX as usize) as u32;
    let confidence = (u32::from(weights.confidence_floor)
        + u32::from(weights.confidence_step) * evidence)
        .clamp(
            u32::from(weights.confidence_floor),
            u32::from(weights.confidence_ceiling),
        ) as u8;

    let company_flags = company_flags(signals);
    let band = RiskBand::for_score(risk_score);
    let explanation = explain(band, signals);

    ScoreCard {
        risk_score,
        is_scam,
        confidence,
        band,
        company_flags,
        explanation,
        components,
    }
}

fn company_flags(signals: &Signals) -> Vec<CompanyFlag> {
    let heuristics = signals.heuristics;
    let mut flags = Vec::new();
    if heuristics.personal_email {
        flags.push(CompanyFlag::PersonalEmailDomain);
    }
    if heuristics.no_website {
        flags.push(CompanyFlag::NoCompanyWebsite);
    }
    if heuristics.too_short {
        flags.push(CompanyFlag::BriefDescription);
    }
    flags
}

fn explain(band: RiskBand, signals: &Signals) -> String {
    match band {
        RiskBand::High => format!(
            "This job posting shows multiple red flags indicating it's likely a scam. Key concerns include {} scam-related keywords and {} high-risk patterns. Be extremely cautious and avoid sharing personal information or making any payments.",
            signals.scam_keywords.len(),
            signals.patterns.len()
        ),
        RiskBand::Medium => format!(
            "This job posting has some concerning elements that warrant caution. While it may be legitimate, the presence of {} potential warning signs suggests you should research the company thoroughly before proceeding.",
            signals.scam_keywords.len()
        ),
        RiskBand::Low => format!(
            "This job posting appears relatively legitimate with {} positive indicators and minimal red flags. However, always verify company details and never provide sensitive information until you've confirmed the opportunity is genuine.",
            signals.legitimacy_keywords.len()
        ),
    }
}
