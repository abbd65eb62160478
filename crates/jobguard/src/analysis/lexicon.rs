//! Immutable keyword, pattern, and archetype tables.
//!
//! Everything here is compiled into the binary and read without synchronization. Changing a
//! table means shipping a new build; [`verify`] guards the tables at startup.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::error;

/// Phrases whose presence raises the risk score.
pub static SCAM_KEYWORDS: [&str; 21] = [
    "work from home",
    "earn $",
    "quick money",
    "no experience needed",
    "processing fee",
    "upfront payment",
    "wire transfer",
    "western union",
    "urgent hiring",
    "immediate start",
    "guaranteed income",
    "easy money",
    "pyramid scheme",
    "multi-level marketing",
    "mlm",
    "investment opportunity",
    "cash advance",
    "credit check required",
    "social security number",
    "bank account details",
    "personal information required",
];

/// Phrases whose presence lowers the risk score.
pub static LEGITIMACY_KEYWORDS: [&str; 14] = [
    "competitive salary",
    "health benefits",
    "company website",
    "established company",
    "specific requirements",
    "team collaboration",
    "professional development",
    "career growth",
    "office location",
    "hr department",
    "interview process",
    "portfolio required",
    "references needed",
    "background check",
];

/// Scam phrasing that a literal substring cannot capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    UnrealisticPayRate,
    WeeklyEarningsPromise,
    NoExperienceNeeded,
    UpfrontFeeRequest,
    WireTransfer,
    UrgentHiring,
    ImmediateStart,
    GuaranteedIncome,
}

impl PatternKind {
    pub fn label(&self) -> &'static str {
        match self {
            PatternKind::UnrealisticPayRate => "unrealistic pay rate",
            PatternKind::WeeklyEarningsPromise => "weekly earnings promise",
            PatternKind::NoExperienceNeeded => "no experience needed",
            PatternKind::UpfrontFeeRequest => "upfront fee request",
            PatternKind::WireTransfer => "wire transfer",
            PatternKind::UrgentHiring => "urgent hiring",
            PatternKind::ImmediateStart => "immediate start",
            PatternKind::GuaranteedIncome => "guaranteed income",
        }
    }
}

// The patterns keep ECMAScript semantics: ASCII-only digits and case folding, a gap that
// stops at line terminators, and the ECMAScript whitespace set.
macro_rules! gap {
    () => {
        r"[^\n\r\x{2028}\x{2029}]*"
    };
}

macro_rules! blank {
    () => {
        r"[\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]*"
    };
}

const PATTERN_SOURCES: [(PatternKind, &str); 8] = [
    (
        PatternKind::UnrealisticPayRate,
        concat!(
            r"\$[0-9]+[,0-9]*",
            blank!(),
            "(?-u:per|/)",
            blank!(),
            "(?-u:week|day|hour)"
        ),
    ),
    (
        PatternKind::WeeklyEarningsPromise,
        concat!("(?-u:earn)", gap!(), r"\$[0-9]+", gap!(), "(?-u:week)"),
    ),
    (
        PatternKind::NoExperienceNeeded,
        concat!("(?-u:no)", gap!(), "(?-u:experience)", gap!(), "(?-u:needed)"),
    ),
    (
        PatternKind::UpfrontFeeRequest,
        concat!("(?-u:send)", gap!(), r"\$[0-9]+"),
    ),
    (
        PatternKind::WireTransfer,
        concat!("(?-u:wire)", gap!(), "(?-u:transfer)"),
    ),
    (
        PatternKind::UrgentHiring,
        concat!("(?-u:urgent)", gap!(), "(?-u:hiring)"),
    ),
    (
        PatternKind::ImmediateStart,
        concat!("(?-u:immediate)", gap!(), "(?-u:start)"),
    ),
    (
        PatternKind::GuaranteedIncome,
        concat!("(?-u:guaranteed)", gap!(), "(?-u:income)"),
    ),
];

/// A compiled, case-insensitive predicate over the original posting text.
#[derive(Debug)]
pub struct HighRiskPattern {
    pub kind: PatternKind,
    regex: Regex,
}

impl HighRiskPattern {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

struct CompiledPatterns {
    patterns: Vec<HighRiskPattern>,
    failures: Vec<(PatternKind, regex::Error)>,
}

static COMPILED_PATTERNS: Lazy<CompiledPatterns> = Lazy::new(|| {
    let mut patterns = Vec::with_capacity(PATTERN_SOURCES.len());
    let mut failures = Vec::new();

    for (kind, source) in PATTERN_SOURCES {
        match RegexBuilder::new(source).case_insensitive(true).build() {
            Ok(regex) => patterns.push(HighRiskPattern { kind, regex }),
            Err(err) => {
                error!(pattern = kind.label(), %err, "high-risk pattern failed to compile");
                failures.push((kind, err));
            }
        }
    }

    CompiledPatterns { patterns, failures }
});

/// Compiled high-risk patterns in declaration order.
pub fn high_risk_patterns() -> &'static [HighRiskPattern] {
    &COMPILED_PATTERNS.patterns
}

/// Named scam persona with the substrings that select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeRule {
    pub name: &'static str,
    pub glyph: &'static str,
    pub description: &'static str,
    pub triggers: &'static [&'static str],
}

/// Archetypes in priority order. The first rule with a matching trigger wins.
pub static ARCHETYPE_RULES: [ArchetypeRule; 6] = [
    ArchetypeRule {
        name: "Quick Money Hustler",
        glyph: "💸",
        description: "This ad is promising unrealistic fast cash. Classic get-rich-quick scam.",
        triggers: &["quick money", "earn $", "easy money", "guaranteed income", "fast cash"],
    },
    ArchetypeRule {
        name: "Phantom Employer",
        glyph: "👻",
        description: "Tiny or fake company profile, barely any followers. Looks like it's hiring from thin air.",
        triggers: &["no company", "brief description", "no website"],
    },
    ArchetypeRule {
        name: "Shady Recruiter",
        glyph: "🕶️",
        description: "The description asks you to connect via Gmail/Telegram/WhatsApp. Very suspicious recruiter behavior.",
        triggers: &["@gmail.com", "@yahoo.com", "telegram", "whatsapp", "personal email"],
    },
    ArchetypeRule {
        name: "Fee Collector",
        glyph: "🎯",
        description: "Asking for upfront payments or processing fees. Legitimate employers never charge candidates.",
        triggers: &["processing fee", "upfront payment", "wire transfer", "send $"],
    },
    ArchetypeRule {
        name: "Data Harvester",
        glyph: "🎣",
        description: "Fishing for personal information like SSN or bank details. Major red flag for identity theft.",
        triggers: &["social security", "bank account", "personal information", "ssn"],
    },
    ArchetypeRule {
        name: "Urgency Manipulator",
        glyph: "⏰",
        description: "Creating false urgency with 'immediate start' and 'limited spots'. Classic pressure tactics.",
        triggers: &["urgent hiring", "immediate start", "limited spots", "act now"],
    },
];

/// Integrity failure in the built-in tables.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("pattern `{}` failed to compile: {source}", .kind.label())]
    InvalidPattern {
        kind: PatternKind,
        #[source]
        source: regex::Error,
    },
    #[error("lexicon phrase `{0}` must be non-empty lowercase text")]
    MalformedPhrase(&'static str),
    #[error("lexicon phrase `{0}` is declared more than once")]
    DuplicatePhrase(&'static str),
    #[error("archetype `{name}` declares {count} triggers, expected 3 to 6")]
    TriggerCount { name: &'static str, count: usize },
    #[error("archetype `{0}` is declared more than once")]
    DuplicateArchetype(&'static str),
}

/// Checks the tables once at startup so that a broken build never serves traffic.
pub fn verify() -> Result<(), LexiconError> {
    if let Some((kind, err)) = COMPILED_PATTERNS.failures.first() {
        return Err(LexiconError::InvalidPattern {
            kind: *kind,
            source: err.clone(),
        });
    }

    let mut seen = HashSet::new();
    for phrase in SCAM_KEYWORDS.iter().chain(LEGITIMACY_KEYWORDS.iter()) {
        if phrase.trim().is_empty() || phrase.to_lowercase() != *phrase {
            return Err(LexiconError::MalformedPhrase(*phrase));
        }
        if !seen.insert(*phrase) {
            return Err(LexiconError::DuplicatePhrase(*phrase));
        }
    }

    let mut names = HashSet::new();
    for rule in &ARCHETYPE_RULES {
        if !(3..=6).contains(&rule.triggers.len()) {
            return Err(LexiconError::TriggerCount {
                name: rule.name,
                count: rule.triggers.len(),
            });
        }
        if let Some(trigger) = rule
            .triggers
            .iter()
            .find(|trigger| trigger.is_empty() || trigger.to_lowercase() != **trigger)
        {
            return Err(LexiconError::MalformedPhrase(*trigger));
        }
        if !names.insert(rule.name) {
            return Err(LexiconError::DuplicateArchetype(rule.name));
        }
    }

    Ok(())
}
