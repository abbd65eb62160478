use super::domain::{HighlightSpan, Signals, SpanCategory};

/// Locates every occurrence of the matched lexicon terms for visual highlighting.
///
/// Scanning resumes one character past each match start, so overlapping occurrences of the
/// same term are all reported. Spans come back sorted by start; on ties, scam spans precede
/// legitimacy spans.
pub fn highlight_evidence(signals: &Signals) -> Vec<HighlightSpan> {
    let lowered = signals.lowered_text();
    let offsets = CharOffsets::new(lowered);

    let scam = signals
        .scam_keywords
        .iter()
        .map(|word| (*word, SpanCategory::Scam));
    let legitimate = signals
        .legitimacy_keywords
        .iter()
        .map(|word| (*word, SpanCategory::Legitimate));

    let mut spans: Vec<HighlightSpan> = scam
        .chain(legitimate)
        .flat_map(|(word, category)| {
            let offsets = &offsets;
            let length = word.chars().count();
            occurrences(lowered, word).map(move |byte_start| {
                let start = offsets.char_index(byte_start);
                HighlightSpan {
                    word,
                    start,
                    end: start + length,
                    category,
                }
            })
        })
        .collect();

    spans.sort_by_key(|span| span.start);
    spans
}

/// Byte offsets of every match of `needle`, including overlapping ones.
fn occurrences<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        if needle.is_empty() || from > haystack.len() {
            return None;
        }
        let found = from + haystack[from..].find(needle)?;
        let step = haystack[found..].chars().next().map_or(1, char::len_utf8);
        from = found + step;
        Some(found)
    })
}

/// Maps byte offsets to character indices.
struct CharOffsets {
    starts: Vec<usize>,
}

impl CharOffsets {
    fn new(text: &str) -> Self {
        Self {
            starts: text.char_indices().map(|(byte, _)| byte).collect(),
        }
    }

    fn char_index(&self, byte: usize) -> usize {
        self.starts.partition_point(|start| *start < byte)
    }
}
