use crate::ingredients::head_noun;
use crate::tagger::Tagger;
use log::trace;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PRONOUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:they|them|it|these|those)\b").expect("valid regex")
});

/// Rewrites pronouns to the ingredient mentioned most recently in the step stream
pub struct CoreferenceResolver {
    heads: Vec<String>,
}

impl CoreferenceResolver {
    pub fn new<T: Tagger + ?Sized>(ingredient_lines: &[String], tagger: &T) -> Self {
        let heads = ingredient_lines
            .iter()
            .map(|line| head_noun(line, tagger))
            .filter(|head| !head.is_empty())
            .collect();
        Self { heads }
    }

    /// Resolve pronouns across `steps`, in order.
    ///
    /// The last mentioned ingredient is carried from step to step, so every
    /// step sees the mentions of all the steps before it.
    pub fn resolve(&self, steps: Vec<String>) -> Vec<String> {
        let (resolved, _) = steps.into_iter().fold(
            (Vec::new(), None::<&str>),
            |(mut resolved, last_ingredient), step| {
                let last_ingredient = self.last_mentioned(&step).or(last_ingredient);
                let step = match last_ingredient {
                    Some(head) => replace_pronouns(&step, head),
                    None => step,
                };
                resolved.push(step);
                (resolved, last_ingredient)
            },
        );
        resolved
    }

    /// Head noun of the last ingredient (in ingredient order) contained in the
    /// lowercased step. Plain containment, so "oil" is found inside "boil".
    fn last_mentioned(&self, step: &str) -> Option<&str> {
        let lowered = step.to_lowercase();
        self.heads
            .iter()
            .filter(|head| lowered.contains(head.as_str()))
            .map(String::as_str)
            .last()
    }
}

fn replace_pronouns(step: &str, head: &str) -> String {
    let replaced = PRONOUN_RE.replace_all(step, |caps: &Captures| {
        let starts_sentence = caps.get(0).is_some_and(|m| m.start() == 0);
        if starts_sentence {
            capitalize(head)
        } else {
            head.to_string()
        }
    });
    if replaced != step {
        trace!("coreference: '{}' -> '{}'", step, replaced);
    }
    replaced.into_owned()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
