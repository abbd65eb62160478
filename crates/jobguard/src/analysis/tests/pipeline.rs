use super::common::*;
use crate::analysis::domain::CompanyFlag;
use crate::analysis::{analyze, analyze_posting, AnalysisError, JobPostingAnalyzer, ScoringWeights};
use serde_json::Value;

#[test]
fn established_posting_scores_zero() {
    let assessment = analyze(ESTABLISHED_POSTING);

    assert!(assessment.scam_keywords.is_empty());
    assert_eq!(assessment.legitimate_indicators.len(), 6);
    assert_eq!(assessment.risk_score, 0);
    assert!(!assessment.is_scam);
    assert_eq!(assessment.confidence, 95);
    assert!(assessment.archetype.is_none());
    assert_eq!(assessment.company_flags, vec![CompanyFlag::NoCompanyWebsite]);
    assert!(assessment.explanation.contains("6 positive indicators"));
}

#[test]
fn terse_posting_scores_twenty_five() {
    let assessment = analyze(TERSE_POSTING);

    assert_eq!(assessment.risk_score, 25);
    assert!(!assessment.is_scam);
    assert_eq!(assessment.confidence, 60);
    assert_eq!(
        assessment.company_flags,
        vec![CompanyFlag::NoCompanyWebsite, CompanyFlag::BriefDescription]
    );
}

#[test]
fn analysis_is_deterministic() {
    let first = serde_json::to_string(&analyze(URGENT_FEE_POSTING)).expect("serializes");
    let second = serde_json::to_string(&analyze(URGENT_FEE_POSTING)).expect("serializes");
    assert_eq!(first, second);
}

#[test]
fn boundary_rejects_missing_or_blank_text() {
    assert_eq!(analyze_posting(None), Err(AnalysisError::MissingText));
    assert_eq!(analyze_posting(Some("")), Err(AnalysisError::MissingText));
    assert_eq!(analyze_posting(Some("  \n\t")), Err(AnalysisError::MissingText));

    let assessment = analyze_posting(Some(TERSE_POSTING)).expect("text accepted");
    assert_eq!(assessment, analyze(TERSE_POSTING));
}

#[test]
fn default_analyzer_uses_standard_weights() {
    let analyzer = JobPostingAnalyzer::default();
    assert_eq!(*analyzer.weights(), ScoringWeights::STANDARD);
    assert_eq!(analyzer.weights().scam_threshold, 60);
    assert!(analyzer.weights().confidence_floor <= analyzer.weights().confidence_ceiling);
    assert_eq!(analyzer.analyze(FEE_COLLECTOR_POSTING).risk_score, 70);
}

#[test]
fn serializes_to_wire_shape() {
    let value = serde_json::to_value(analyze(URGENT_FEE_POSTING)).expect("serializes");

    assert_eq!(value["isScam"], Value::Bool(true));
    assert_eq!(value["riskScore"], 100);
    assert_eq!(value["confidence"], 95);
    assert_eq!(value["companyFlags"][0], "Uses personal email domain");
    assert_eq!(value["personality"]["type"], "Quick Money Hustler");
    assert_eq!(value["personality"]["emoji"], "💸");
    assert_eq!(value["heatmapData"][0]["word"], "urgent hiring");
    assert_eq!(value["heatmapData"][0]["type"], "scam");
    assert!(value.get("patterns").is_none());

    let quiet = serde_json::to_value(analyze(ESTABLISHED_POSTING)).expect("serializes");
    assert_eq!(quiet["personality"], Value::Null);
    assert_eq!(quiet["heatmapData"][0]["type"], "legit");
    assert!(quiet["legitimateIndicators"].is_array());
}
