use crate::analysis::domain::{HeuristicFlags, Signals};
use crate::analysis::lexicon::PatternKind;

pub(super) const URGENT_FEE_POSTING: &str = "URGENT HIRING! Work from home and earn $5000/week! Send $50 processing fee via wire transfer to quickmoney@gmail.com. Guaranteed income!";

pub(super) const ESTABLISHED_POSTING: &str = "Software Engineer position, competitive salary, health benefits, established company, team collaboration, portfolio required, background check.";

pub(super) const TERSE_POSTING: &str = "Join our team now.";

pub(super) const FEE_COLLECTOR_POSTING: &str = "Our company requires a processing fee and an upfront payment before onboarding begins. Contact the team at careers.example.com for the wire transfer details today.";

pub(super) const DATA_HARVESTER_POSTING: &str = "Remote data entry role at Acme Inc. Provide your social security number and bank account details on our website for a cash advance and an investment opportunity.";

pub(super) const MESSENGER_POSTING: &str = "Reach our recruiter on Telegram about this role at Northwind Corp. Details are posted on our careers website along with the full benefits overview.";

/// Signals with no evidence and no heuristics fired.
pub(super) fn quiet_signals() -> Signals {
    Signals {
        scam_keywords: Vec::new(),
        legitimacy_keywords: Vec::new(),
        patterns: Vec::new(),
        heuristics: HeuristicFlags::default(),
        lowered: String::new(),
    }
}

pub(super) fn signals_with(
    scam_keywords: &[&'static str],
    legitimacy_keywords: &[&'static str],
    patterns: &[PatternKind],
) -> Signals {
    Signals {
        scam_keywords: scam_keywords.to_vec(),
        legitimacy_keywords: legitimacy_keywords.to_vec(),
        patterns: patterns.to_vec(),
        ..quiet_signals()
    }
}

/// Lowercased characters `start..end` of `text`.
pub(super) fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.to_lowercase()
        .chars()
        .skip(start)
        .take(end - start)
        .collect()
}
