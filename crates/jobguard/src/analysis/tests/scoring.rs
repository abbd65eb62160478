use super::common::*;
use crate::analysis::domain::{CompanyFlag, HeuristicFlags};
use crate::analysis::lexicon::PatternKind;
use crate::analysis::{score_signals, RiskBand, RiskFactor, ScoringWeights};

#[test]
fn weighted_sum_combines_every_factor() {
    let mut signals = signals_with(
        &["processing fee", "wire transfer"],
        &["health benefits"],
        &[PatternKind::WireTransfer],
    );
    signals.heuristics = HeuristicFlags {
        personal_email: true,
        too_short: false,
        no_company_identifier: true,
        no_website: false,
    };

    let card = score_signals(&signals, &ScoringWeights::STANDARD);

    // 30 + 25 - 10 + 10 + 10
    assert_eq!(card.risk_score, 65);
    assert!(card.is_scam);
    assert_eq!(card.band, RiskBand::Medium);
    assert_eq!(card.confidence, 60 + 8 * 4);
    assert!(card
        .components
        .iter()
        .any(|component| component.factor == RiskFactor::LegitimacyKeywords
            && component.points == -10));
}

#[test]
fn score_is_clamped_at_both_ends() {
    let legit = signals_with(
        &[],
        &[
            "competitive salary",
            "health benefits",
            "career growth",
            "hr department",
        ],
        &[],
    );
    let card = score_signals(&legit, &ScoringWeights::STANDARD);
    assert_eq!(card.risk_score, 0);
    assert!(!card.is_scam);

    let scam = signals_with(
        &["work from home", "earn $", "quick money", "easy money"],
        &[],
        &[
            PatternKind::UnrealisticPayRate,
            PatternKind::GuaranteedIncome,
        ],
    );
    let card = score_signals(&scam, &ScoringWeights::STANDARD);
    assert_eq!(card.risk_score, 100);
    assert_eq!(card.band, RiskBand::High);
}

#[test]
fn threshold_sits_at_sixty() {
    let at = signals_with(
        &["mlm", "cash advance", "easy money", "western union"],
        &[],
        &[],
    );
    let card = score_signals(&at, &ScoringWeights::STANDARD);
    assert_eq!(card.risk_score, 60);
    assert!(card.is_scam);

    let mut below = signals_with(&["mlm", "cash advance"], &[], &[]);
    below.heuristics.too_short = true;
    below.heuristics.no_company_identifier = true;
    let card = score_signals(&below, &ScoringWeights::STANDARD);
    assert_eq!(card.risk_score, 55);
    assert!(!card.is_scam);
}

#[test]
fn confidence_grows_with_evidence_and_saturates() {
    let weights = ScoringWeights::STANDARD;
    let mut previous = 0;
    for count in 0..8 {
        let keywords: Vec<&'static str> = crate::analysis::lexicon::SCAM_KEYWORDS[..count].to_vec();
        let signals = signals_with(&keywords, &[], &[]);
        let card = score_signals(&signals, &weights);
        assert!(card.confidence >= previous);
        assert!((60..=95).contains(&card.confidence));
        previous = card.confidence;
    }
    assert_eq!(previous, 95);
}

#[test]
fn explanation_tiers_follow_score_bands() {
    assert_eq!(RiskBand::for_score(100), RiskBand::High);
    assert_eq!(RiskBand::for_score(70), RiskBand::High);
    assert_eq!(RiskBand::for_score(69), RiskBand::Medium);
    assert_eq!(RiskBand::for_score(40), RiskBand::Medium);
    assert_eq!(RiskBand::for_score(39), RiskBand::Low);
    assert_eq!(RiskBand::for_score(0), RiskBand::Low);

    let high = signals_with(
        &["processing fee", "wire transfer", "upfront payment"],
        &[],
        &[PatternKind::WireTransfer],
    );
    let card = score_signals(&high, &ScoringWeights::STANDARD);
    assert!(card.explanation.contains("3 scam-related keywords"));
    assert!(card.explanation.contains("1 high-risk patterns"));

    let low = signals_with(&[], &["career growth", "hr department"], &[]);
    let card = score_signals(&low, &ScoringWeights::STANDARD);
    assert!(card.explanation.contains("2 positive indicators"));
}

#[test]
fn company_flags_are_informational_and_ordered() {
    let mut signals = quiet_signals();
    signals.heuristics = HeuristicFlags {
        personal_email: true,
        too_short: true,
        no_company_identifier: false,
        no_website: true,
    };

    let card = score_signals(&signals, &ScoringWeights::STANDARD);

    assert_eq!(
        card.company_flags,
        vec![
            CompanyFlag::PersonalEmailDomain,
            CompanyFlag::NoCompanyWebsite,
            CompanyFlag::BriefDescription,
        ]
    );
    // no_website carries no weight: 10 + 15.
    assert_eq!(card.risk_score, 25);
}
