use super::domain::{HeuristicFlags, Signals};
use super::lexicon::{high_risk_patterns, LEGITIMACY_KEYWORDS, SCAM_KEYWORDS};

const PERSONAL_EMAIL_DOMAINS: [&str; 2] = ["@gmail.com", "@yahoo.com"];
const COMPANY_IDENTIFIERS: [&str; 3] = ["company", "corp", "inc"];
const WEBSITE_MARKERS: [&str; 2] = ["website", ".com"];

/// Postings shorter than this many characters count as suspiciously brief.
pub const MIN_DESCRIPTION_CHARS: usize = 100;

/// Scans a posting once and records every lexicon hit and heuristic.
///
/// Keyword matching is plain substring search over the lowercased text, so `"mlm"` also hits
/// inside longer words. Patterns run against the original text with their own
/// case-insensitive flag.
pub fn extract_signals(text: &str) -> Signals {
    let lowered = text.to_lowercase();

    let scam_keywords = matched_phrases(&lowered, &SCAM_KEYWORDS);
    let legitimacy_keywords = matched_phrases(&lowered, &LEGITIMACY_KEYWORDS);

    let patterns = high_risk_patterns()
        .iter()
        .filter(|pattern| pattern.is_match(text))
        .map(|pattern| pattern.kind)
        .collect();

    let heuristics = HeuristicFlags {
        personal_email: contains_any(&lowered, &PERSONAL_EMAIL_DOMAINS),
        too_short: text.chars().count() < MIN_DESCRIPTION_CHARS,
        no_company_identifier: !contains_any(&lowered, &COMPANY_IDENTIFIERS),
        no_website: !contains_any(&lowered, &WEBSITE_MARKERS),
    };

    Signals {
        scam_keywords,
        legitimacy_keywords,
        patterns,
        heuristics,
        lowered,
    }
}

fn matched_phrases(lowered: &str, lexicon: &'static [&'static str]) -> Vec<&'static str> {
    lexicon
        .iter()
        .copied()
        .filter(|phrase| lowered.contains(phrase))
        .collect()
}

fn contains_any(lowered: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| lowered.contains(needle))
}
