use super::domain::{ArchetypeMatch, CompanyFlag, Signals};
use super::lexicon::{ArchetypeRule, ARCHETYPE_RULES};

/// Picks the first archetype, in priority order, with a trigger found in the evidence.
///
/// A trigger counts when it appears inside a matched scam keyword, inside a company flag, or
/// anywhere in the lowercased posting. Callers only ask for a persona once a posting is
/// flagged; `None` is a normal answer.
pub fn classify_archetype(signals: &Signals, flags: &[CompanyFlag]) -> Option<ArchetypeMatch> {
    let flag_text: Vec<String> = flags.iter().map(|flag| flag.label().to_lowercase()).collect();

    ARCHETYPE_RULES
        .iter()
        .find(|rule| rule_matches(rule, signals, &flag_text))
        .map(|rule| ArchetypeMatch {
            name: rule.name,
            glyph: rule.glyph,
            description: rule.description,
        })
}

fn rule_matches(rule: &ArchetypeRule, signals: &Signals, flag_text: &[String]) -> bool {
    rule.triggers.iter().any(|trigger| {
        signals
            .scam_keywords
            .iter()
            .any(|keyword| keyword.contains(trigger))
            || flag_text.iter().any(|flag| flag.contains(trigger))
            || signals.lowered_text().contains(trigger)
    })
}
