//! End-to-end screening scenarios through the public analysis and company facades.

use std::collections::HashSet;
use std::sync::Arc;

use jobguard::analysis::lexicon::{ARCHETYPE_RULES, LEGITIMACY_KEYWORDS, SCAM_KEYWORDS};
use jobguard::analysis::{analyze, CompanyFlag, RiskAssessment};
use jobguard::company::{CompanyDirectory, CompanyLookup, SeededSource};

const CORPUS: [&str; 8] = [
    "URGENT HIRING! Work from home and earn $5000/week! Send $50 processing fee via wire transfer to quickmoney@gmail.com. Guaranteed income!",
    "Software Engineer position, competitive salary, health benefits, established company, team collaboration, portfolio required, background check.",
    "Join our team now.",
    "",
    "Immediate start! No experience needed. Message us on WhatsApp, limited spots, act now and make $300 per day from your couch.",
    "Data analyst at Fabrikam Inc. Hybrid office location, professional development budget, career growth track and a structured interview process with the HR department.",
    "mlmlmlm MLM Mlm multi-level marketing pyramid scheme easy money easy money EASY MONEY",
    "Équipe née à Montréal. Envoyez votre social security number et bank account details par wire transfer à recrutement@yahoo.com.",
];

fn lowered_slice(text: &str, start: usize, end: usize) -> String {
    text.to_lowercase()
        .chars()
        .skip(start)
        .take(end - start)
        .collect()
}

fn assert_invariants(text: &str, assessment: &RiskAssessment) {
    assert!(assessment.risk_score <= 100, "score bound for {text:?}");
    assert!(
        (60..=95).contains(&assessment.confidence),
        "confidence bound for {text:?}"
    );
    assert_eq!(assessment.is_scam, assessment.risk_score >= 60);

    let starts: Vec<_> = assessment.highlights.iter().map(|span| span.start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted, "spans sorted for {text:?}");
    for span in &assessment.highlights {
        assert_eq!(lowered_slice(text, span.start, span.end), span.word);
    }

    let scam: HashSet<_> = assessment.scam_keywords.iter().collect();
    assert_eq!(scam.len(), assessment.scam_keywords.len());
    assert!(assessment
        .scam_keywords
        .iter()
        .all(|keyword| SCAM_KEYWORDS.contains(keyword)));

    let legit: HashSet<_> = assessment.legitimate_indicators.iter().collect();
    assert_eq!(legit.len(), assessment.legitimate_indicators.len());
    assert!(assessment
        .legitimate_indicators
        .iter()
        .all(|keyword| LEGITIMACY_KEYWORDS.contains(keyword)));

    if let Some(archetype) = assessment.archetype {
        assert!(assessment.is_scam);
        assert!(ARCHETYPE_RULES.iter().any(|rule| rule.name == archetype.name));
    }
}

#[test]
fn corpus_respects_assessment_invariants() {
    for text in CORPUS {
        let assessment = analyze(text);
        assert_invariants(text, &assessment);
        assert_eq!(assessment, analyze(text), "deterministic for {text:?}");
    }
}

#[test]
fn fee_scam_is_flagged_with_persona() {
    let assessment = analyze(CORPUS[0]);

    for keyword in [
        "urgent hiring",
        "work from home",
        "earn $",
        "processing fee",
        "wire transfer",
        "guaranteed income",
    ] {
        assert!(assessment.scam_keywords.contains(&keyword), "{keyword}");
    }
    assert!(assessment.patterns.len() >= 2);
    assert_eq!(assessment.risk_score, 100);
    assert!(assessment.is_scam);
    let persona = assessment.archetype.expect("persona assigned").name;
    assert!(persona == "Quick Money Hustler" || persona == "Fee Collector");
    assert!(assessment
        .company_flags
        .contains(&CompanyFlag::PersonalEmailDomain));
}

#[test]
fn established_posting_is_clean() {
    let assessment = analyze(CORPUS[1]);

    assert!(assessment.scam_keywords.is_empty());
    assert!(assessment.legitimate_indicators.len() >= 5);
    assert_eq!(assessment.risk_score, 0);
    assert!(!assessment.is_scam);
    assert!(assessment.archetype.is_none());
}

#[test]
fn terse_posting_trips_only_heuristics() {
    let assessment = analyze(CORPUS[2]);

    assert_eq!(assessment.risk_score, 25);
    assert!(!assessment.is_scam);
    assert!(assessment
        .company_flags
        .contains(&CompanyFlag::BriefDescription));
}

#[test]
fn company_flags_outrank_later_personas() {
    let assessment = analyze(CORPUS[4]);

    assert!(assessment.is_scam);
    assert!(assessment
        .company_flags
        .contains(&CompanyFlag::NoCompanyWebsite));
    // "no company website mentioned" hits a Phantom Employer trigger before the
    // recruiter and urgency rules are consulted.
    assert_eq!(
        assessment.archetype.map(|matched| matched.name),
        Some("Phantom Employer")
    );
}

#[test]
fn unknown_company_url_gets_bounded_placeholders() {
    let lookup = CompanyLookup::with_source(
        Arc::new(CompanyDirectory::builtin()),
        SeededSource::new(2024),
    );

    let stats = lookup
        .lookup("linkedin.com/company/acme-corp")
        .expect("lookup succeeds");

    assert_eq!(stats.company_name, "Acme Corp");
    assert!(!stats.found);
    assert!((5..=55).contains(&stats.followers));
    assert!((1..=6).contains(&stats.employees));
    assert!(stats.engagement <= 2);
}
