use crate::config::Vocabulary;
use log::trace;

/// Prepositions that keep a following cooking verb inside the current step
/// ("bring to boil", "cook in simmering ...")
const SPLIT_SUPPRESSING_PREPOSITIONS: &[&str] = &[
    "over", "under", "in", "on", "with", "to", "from", "into", "onto", "at",
];

const LEADING_CONNECTORS: &[&str] = &["and then", "and", "then"];

/// Split a clause into single-action steps at cooking-verb boundaries.
///
/// The first cooking verb of a span never splits. A later one splits unless it
/// repeats the span's first token or follows one of the suppressing
/// prepositions. A clause without any cooking verb comes back whole.
pub fn split_atomic_steps(clause: &str, vocab: &Vocabulary) -> Vec<String> {
    let words: Vec<&str> = clause.split_whitespace().collect();
    let mut steps = Vec::new();
    let mut span: Vec<&str> = Vec::new();
    let mut verb_seen = false;

    for (i, &word) in words.iter().enumerate() {
        span.push(word);

        let lowered = normalize_word(word);
        if !vocab.is_cooking_verb(&lowered) {
            continue;
        }
        if !verb_seen {
            verb_seen = true;
            continue;
        }

        // same verb reused: compared against the span's first token only
        if span[0].to_lowercase() == lowered {
            continue;
        }
        let previous = i.checked_sub(1).map(|p| normalize_word(words[p]));
        if previous
            .as_deref()
            .is_some_and(|p| SPLIT_SUPPRESSING_PREPOSITIONS.contains(&p))
        {
            continue;
        }

        let before = trim_span(&span[..span.len() - 1].join(" "));
        if !before.is_empty() {
            trace!("split before '{}': '{}'", word, before);
            steps.push(before);
        }
        span = vec![word];
    }

    let last = trim_span(&span.join(" "));
    if !last.is_empty() {
        steps.push(last);
    }

    steps
        .into_iter()
        .map(|step| strip_leading_connectors(&step).to_string())
        .filter(|step| !step.is_empty())
        .collect()
}

fn normalize_word(word: &str) -> String {
    word.to_lowercase().trim_matches(',').to_string()
}

fn trim_span(span: &str) -> String {
    span.trim_matches(|c| c == ',' || c == ' ').to_string()
}

/// Drop any leading "and", "then" or "and then" (case-insensitive)
pub(crate) fn strip_leading_connectors(step: &str) -> &str {
    let mut rest = step.trim();
    'strip: loop {
        for connector in LEADING_CONNECTORS {
            let Some(head) = rest.get(..connector.len()) else {
                continue;
            };
            let followed_by_space = rest[connector.len()..].starts_with(char::is_whitespace);
            if head.eq_ignore_ascii_case(connector) && followed_by_space {
                rest = rest[connector.len()..].trim_start();
                continue 'strip;
            }
        }
        return rest;
    }
}
