//! Part-of-speech, lemma and entity tagging behind a narrow trait.
//!
//! Segmentation and merging are pure string heuristics; only feature
//! extraction, head-noun normalization and grounding consult a [`Tagger`].
//! Any backend producing [`TaggedToken`]s can be plugged in, and tests use
//! hand-written mocks.

use serde::Serialize;
use std::sync::Arc;

mod lexicon;

pub use lexicon::LexiconTagger;

/// Coarse universal part-of-speech classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Adposition,
    Determiner,
    Pronoun,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
    Other,
}

/// Named-entity labels the pipeline cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityLabel {
    Time,
    Date,
    Quantity,
}

/// Entity membership of a single token, in IOB style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityTag {
    pub label: EntityLabel,
    /// True for the first token of a span
    pub begins: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedToken {
    pub surface: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub entity: Option<EntityTag>,
}

impl TaggedToken {
    pub fn new(surface: impl Into<String>, lemma: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            surface: surface.into(),
            lemma: lemma.into(),
            pos,
            entity: None,
        }
    }

    pub fn with_entity(mut self, label: EntityLabel, begins: bool) -> Self {
        self.entity = Some(EntityTag { label, begins });
        self
    }

    pub fn is_noun(&self) -> bool {
        matches!(self.pos, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }

    pub fn is_verb(&self) -> bool {
        self.pos == PartOfSpeech::Verb
    }

    pub fn like_num(&self) -> bool {
        like_num(&self.surface)
    }
}

/// A contiguous run of tokens sharing an entity label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub label: EntityLabel,
    pub text: String,
}

/// Tags a piece of text into an ordered token stream.
///
/// Implementations must be deterministic. Whether one instance may be shared
/// across threads is expressed by the implementor being `Send + Sync`; the
/// concurrent pipeline path requires both, the sequential path neither.
pub trait Tagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        (**self).tag(text)
    }
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        (**self).tag(text)
    }
}

impl<T: Tagger + ?Sized> Tagger for Arc<T> {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        (**self).tag(text)
    }
}

/// Group tagged tokens into entity spans, in text order
pub fn entity_spans(tokens: &[TaggedToken]) -> Vec<EntitySpan> {
    let mut spans: Vec<EntitySpan> = Vec::new();
    let mut current: Option<(EntityLabel, Vec<&str>)> = None;

    for token in tokens {
        let continues = match (&current, token.entity) {
            (Some((label, _)), Some(tag)) => *label == tag.label && !tag.begins,
            _ => false,
        };
        if continues {
            if let Some((_, words)) = current.as_mut() {
                words.push(token.surface.as_str());
            }
            continue;
        }

        if let Some((label, words)) = current.take() {
            spans.push(EntitySpan {
                label,
                text: words.join(" "),
            });
        }
        if let Some(tag) = token.entity {
            current = Some((tag.label, vec![token.surface.as_str()]));
        }
    }

    if let Some((label, words)) = current {
        spans.push(EntitySpan {
            label,
            text: words.join(" "),
        });
    }

    spans
}

const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "fifteen", "twenty", "thirty", "forty", "fifty", "sixty", "hundred", "dozen",
];

const VULGAR_FRACTIONS: &[char] = &['¼', '½', '¾', '⅓', '⅔', '⅛', '⅜', '⅝', '⅞'];

/// Whether a token reads as a number: digits, fractions, ranges or number words
pub fn like_num(word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() {
        return false;
    }

    let lower = word.to_lowercase();
    if NUMBER_WORDS.contains(&lower.as_str()) {
        return true;
    }

    let mut has_digit = false;
    for c in word.chars() {
        if c.is_ascii_digit() || VULGAR_FRACTIONS.contains(&c) {
            has_digit = true;
        } else if !matches!(c, '.' | ',' | '/' | '-' | '–') {
            return false;
        }
    }
    has_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_num() {
        assert!(like_num("2"));
        assert!(like_num("1.5"));
        assert!(like_num("1/2"));
        assert!(like_num("10-15"));
        assert!(like_num("½"));
        assert!(like_num("1½"));
        assert!(like_num("Three"));
        assert!(!like_num("350F"));
        assert!(!like_num("-"));
        assert!(!like_num("cups"));
        assert!(!like_num(""));
    }

    #[test]
    fn test_entity_spans_group_contiguous_tokens() {
        let tokens = vec![
            TaggedToken::new("Bake", "bake", PartOfSpeech::Verb),
            TaggedToken::new("at", "at", PartOfSpeech::Adposition),
            TaggedToken::new("350", "350", PartOfSpeech::Numeral)
                .with_entity(EntityLabel::Quantity, true),
            TaggedToken::new("degrees", "degree", PartOfSpeech::Noun)
                .with_entity(EntityLabel::Quantity, false),
            TaggedToken::new("for", "for", PartOfSpeech::Adposition),
            TaggedToken::new("20", "20", PartOfSpeech::Numeral)
                .with_entity(EntityLabel::Time, true),
            TaggedToken::new("minutes", "minute", PartOfSpeech::Noun)
                .with_entity(EntityLabel::Time, false),
        ];

        let spans = entity_spans(&tokens);
        assert_eq!(
            spans,
            vec![
                EntitySpan {
                    label: EntityLabel::Quantity,
                    text: "350 degrees".to_string()
                },
                EntitySpan {
                    label: EntityLabel::Time,
                    text: "20 minutes".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_adjacent_spans_split_on_begin_marker() {
        let tokens = vec![
            TaggedToken::new("5", "5", PartOfSpeech::Numeral).with_entity(EntityLabel::Time, true),
            TaggedToken::new("minutes", "minute", PartOfSpeech::Noun)
                .with_entity(EntityLabel::Time, false),
            TaggedToken::new("2", "2", PartOfSpeech::Numeral).with_entity(EntityLabel::Time, true),
            TaggedToken::new("hours", "hour", PartOfSpeech::Noun)
                .with_entity(EntityLabel::Time, false),
        ];

        let spans = entity_spans(&tokens);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "5 minutes");
        assert_eq!(spans[1].text, "2 hours");
    }
}
