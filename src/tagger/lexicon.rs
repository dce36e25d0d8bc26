use super::{like_num, EntityLabel, EntityTag, PartOfSpeech, TaggedToken, Tagger};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

const GENERAL_VERBS: &[&str] = &[
    "add", "allow", "arrange", "bake", "baste", "beat", "blend", "boil", "braise", "bring",
    "broil", "brush", "check", "chill", "chop", "coat", "combine", "continue", "cook", "cool",
    "cover", "crush", "cut", "deglaze", "dice", "dissolve", "divide", "drain", "dredge",
    "drizzle", "fill", "flip", "fold", "fry", "garnish", "grate", "grease", "grill", "heat",
    "keep", "knead", "layer", "let", "make", "marinate", "mash", "measure", "melt",
    "microwave", "mince", "mix", "peel", "place", "poach", "pour", "preheat", "prick", "puree",
    "put", "reduce", "refrigerate", "remove", "repeat", "reserve", "rest", "return", "rinse",
    "roast", "roll", "rub", "saute", "scoop", "sear", "season", "serve", "set", "shake",
    "shape", "shred", "simmer", "skim", "slice", "soak", "spoon", "spread", "sprinkle",
    "squeeze", "steam", "stir", "strain", "stuff", "take", "taste", "thaw", "toast", "top",
    "toss", "transfer", "trim", "turn", "use", "wash", "whip", "whisk", "wrap",
];

const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("beaten", "beat"),
    ("brought", "bring"),
    ("kept", "keep"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("leaves", "leaf"),
    ("halves", "half"),
    ("loaves", "loaf"),
    ("knives", "knife"),
    ("cookies", "cookie"),
    ("brownies", "brownie"),
    ("veggies", "veggie"),
    ("molasses", "molasses"),
    ("anchovies", "anchovy"),
    ("geese", "goose"),
];

const PRONOUNS: &[&str] = &[
    "it", "they", "them", "these", "those", "you", "we", "i", "itself", "themselves",
    "everything", "something",
];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "each", "every", "some", "any", "all", "both", "your",
    "its", "their", "another", "no",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "until", "while", "when", "if", "once", "as", "than",
];

const PARTICLES: &[&str] = &["up", "out", "down", "off", "not"];

const ADPOSITIONS: &[&str] = &[
    "over", "under", "in", "on", "with", "to", "from", "into", "onto", "at", "for", "of", "by",
    "about", "through", "across", "around", "between", "without", "per", "after", "before",
    "during", "like", "inside", "along",
];

const ADVERBS: &[&str] = &[
    "then", "also", "again", "together", "aside", "away", "just", "very", "too", "well",
    "further", "more", "less", "almost", "still", "now", "here", "there", "halfway",
];

const ADJECTIVES: &[&str] = &[
    "small", "large", "medium", "big", "fresh", "dry", "low", "high", "hot", "cold", "warm",
    "boneless", "skinless", "whole", "extra", "virgin", "unsalted", "salted", "kosher", "light",
    "dark", "brown", "white", "red", "green", "yellow", "black", "sweet", "sour", "thin",
    "thick", "fine", "coarse", "soft", "ground", "golden", "crispy", "tender", "smooth", "even",
    "remaining", "additional", "optional", "heavy", "all-purpose", "lean", "raw", "ripe",
    "frozen", "firm", "done", "ready", "clean", "large-size", "bite-size", "new", "other",
    "same", "plain", "fluffy", "bubbly", "lukewarm", "room",
];

const NOUNS_ENDING_IN_LY: &[&str] = &["jelly", "belly", "lily"];

const LEADING_PUNCT: &[char] = &['(', '[', '{', '"', '\'', '“', '‘'];

const TRAILING_PUNCT: &[char] = &[
    ',', '.', ';', ':', '!', '?', ')', ']', '}', '"', '\'', '”', '’',
];

const SENTENCE_PUNCT: &[&str] = &[".", "!", "?", ":"];

const TIME_UNITS: &[&str] = &[
    "second", "seconds", "sec", "secs", "minute", "minutes", "min", "mins", "hour", "hours",
    "hr", "hrs",
];

const DATE_UNITS: &[&str] = &["day", "days", "week", "weeks", "night", "nights"];

const RANGE_WORDS: &[&str] = &["to", "-", "–", "or"];

const DEGREE_WORDS: &[&str] = &["degrees", "degree", "deg", "°"];

const TEMPERATURE_SCALES: &[&str] = &[
    "F", "C", "°F", "°C", "Fahrenheit", "Celsius", "fahrenheit", "celsius",
];

static TEMPERATURE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(?:\.\d+)?(?:°\s*[FfCc]?|[FC])$").expect("valid regex")
});

/// Rule-based English tagger driven by closed-class word lists and a verb lexicon.
///
/// Good enough for imperative recipe prose; any statistical tagger can replace
/// it through the [`Tagger`] trait.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    verbs: HashSet<String>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self {
            verbs: GENERAL_VERBS.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Extend the verb lexicon, typically with the configured cooking verbs
    pub fn with_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.verbs.extend(
            verbs
                .into_iter()
                .map(|v| v.as_ref().trim().to_lowercase())
                .filter(|v| !v.is_empty()),
        );
        self
    }

    fn tag_word(&self, surface: &str, index: usize, previous: &[TaggedToken]) -> TaggedToken {
        let lower = surface.to_lowercase();
        let word = lower.as_str();

        if is_punctuation(surface) {
            return TaggedToken::new(surface, surface, PartOfSpeech::Punctuation);
        }
        if TEMPERATURE_TOKEN_RE.is_match(surface) || like_num(surface) {
            return TaggedToken::new(surface, word, PartOfSpeech::Numeral);
        }

        let closed_class = if PRONOUNS.contains(&word) {
            Some(PartOfSpeech::Pronoun)
        } else if DETERMINERS.contains(&word) {
            Some(PartOfSpeech::Determiner)
        } else if CONJUNCTIONS.contains(&word) {
            Some(PartOfSpeech::Conjunction)
        } else if PARTICLES.contains(&word) {
            Some(PartOfSpeech::Particle)
        } else if ADPOSITIONS.contains(&word) {
            Some(PartOfSpeech::Adposition)
        } else {
            None
        };
        if let Some(pos) = closed_class {
            return TaggedToken::new(surface, word, pos);
        }

        if let Some(lemma) = self.verb_lemma(word) {
            return match verb_reading(word, &lemma, previous) {
                PartOfSpeech::Verb => TaggedToken::new(surface, lemma, PartOfSpeech::Verb),
                PartOfSpeech::Adjective => TaggedToken::new(surface, word, PartOfSpeech::Adjective),
                pos => TaggedToken::new(surface, singularize(word), pos),
            };
        }

        if ADJECTIVES.contains(&word) || (word.ends_with("ed") && word.len() > 4) {
            return TaggedToken::new(surface, word, PartOfSpeech::Adjective);
        }
        if ADVERBS.contains(&word)
            || (word.ends_with("ly") && word.len() > 4 && !NOUNS_ENDING_IN_LY.contains(&word))
        {
            return TaggedToken::new(surface, word, PartOfSpeech::Adverb);
        }
        if !word.chars().any(char::is_alphabetic) {
            return TaggedToken::new(surface, word, PartOfSpeech::Other);
        }

        let starts_upper = surface.chars().next().is_some_and(char::is_uppercase);
        let after_sentence_start = previous
            .last()
            .map_or(true, |t| SENTENCE_PUNCT.contains(&t.surface.as_str()));
        let pos = if starts_upper && index > 0 && !after_sentence_start {
            PartOfSpeech::ProperNoun
        } else {
            PartOfSpeech::Noun
        };
        TaggedToken::new(surface, singularize(word), pos)
    }

    /// Base form of a known verb, undoing -s, -es, -ies, -ing and -ed inflection
    fn verb_lemma(&self, word: &str) -> Option<String> {
        if self.verbs.contains(word) {
            return Some(word.to_string());
        }
        if let Some((_, base)) = IRREGULAR_VERBS.iter().find(|(form, _)| *form == word) {
            return Some(base.to_string());
        }

        let mut candidates: Vec<String> = Vec::new();
        if let Some(stem) = word.strip_suffix("ies") {
            candidates.push(format!("{stem}y"));
        }
        if let Some(stem) = word.strip_suffix("es") {
            candidates.push(stem.to_string());
        }
        if let Some(stem) = word.strip_suffix('s') {
            candidates.push(stem.to_string());
        }
        if let Some(stem) = word.strip_suffix("ied") {
            candidates.push(format!("{stem}y"));
        }
        for suffix in ["ing", "ed"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                candidates.push(stem.to_string());
                candidates.push(format!("{stem}e"));
                if let Some(single) = undouble(stem) {
                    candidates.push(single);
                }
            }
        }

        candidates.into_iter().find(|c| self.verbs.contains(c))
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let mut tokens: Vec<TaggedToken> = Vec::new();
        for (index, surface) in split_tokens(text).iter().enumerate() {
            let token = self.tag_word(surface, index, &tokens);
            tokens.push(token);
        }
        mark_entities(&mut tokens);
        tokens
    }
}

/// Decide whether a verb-shaped word acts as a verb in context.
///
/// After a determiner, numeral or a non-infinitive preposition it is a noun
/// ("a whisk", "2 slices", "over heat"), or an adjective for participles
/// ("the chopped onion"). A gerund right after a noun is a noun too
/// ("Italian seasoning"). Third-person forms only read as verbs after a
/// pronoun ("until it melts"), otherwise they are plural nouns ("dinner rolls").
fn verb_reading(word: &str, lemma: &str, previous: &[TaggedToken]) -> PartOfSpeech {
    let anchor = previous
        .iter()
        .rev()
        .find(|t| t.pos != PartOfSpeech::Adjective);

    let nominal = match anchor {
        Some(t) => match t.pos {
            PartOfSpeech::Determiner | PartOfSpeech::Numeral => true,
            PartOfSpeech::Adposition => t.lemma != "to",
            PartOfSpeech::Noun | PartOfSpeech::ProperNoun => word.ends_with("ing"),
            _ => false,
        },
        None => false,
    };
    if nominal {
        return if word.ends_with("ed") {
            PartOfSpeech::Adjective
        } else {
            PartOfSpeech::Noun
        };
    }

    if word != lemma && word.ends_with('s') {
        let after_pronoun = previous
            .last()
            .is_some_and(|t| t.pos == PartOfSpeech::Pronoun);
        if !after_pronoun {
            return PartOfSpeech::Noun;
        }
    }

    PartOfSpeech::Verb
}

fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && !"aeiou".contains(last) {
        Some(stem[..stem.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}

/// Singular lemma of a (possibly plural) noun
pub(crate) fn singularize(word: &str) -> String {
    if let Some((_, singular)) = IRREGULAR_NOUNS.iter().find(|(plural, _)| *plural == word) {
        return singular.to_string();
    }
    if word.len() <= 3 || word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("oes") {
        return format!("{stem}o");
    }
    for suffix in ["ches", "shes", "xes", "zes", "sses"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

fn is_punctuation(surface: &str) -> bool {
    !surface.is_empty() && surface.chars().all(|c| !c.is_alphanumeric() && c != '°')
}

/// Split on whitespace, peeling brackets, quotes and trailing punctuation into
/// tokens of their own
fn split_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for chunk in text.split_whitespace() {
        let chars: Vec<char> = chunk.chars().collect();
        let mut lo = 0;
        let mut hi = chars.len();

        while lo < hi && LEADING_PUNCT.contains(&chars[lo]) {
            tokens.push(chars[lo].to_string());
            lo += 1;
        }

        let mut trailing = Vec::new();
        while hi > lo && TRAILING_PUNCT.contains(&chars[hi - 1]) {
            trailing.push(chars[hi - 1].to_string());
            hi -= 1;
        }

        if lo < hi {
            tokens.push(chars[lo..hi].iter().collect());
        }
        tokens.extend(trailing.into_iter().rev());
    }

    tokens
}

fn mark_entities(tokens: &mut [TaggedToken]) {
    let mut i = 0;
    while i < tokens.len() {
        let span = temperature_span(tokens, i)
            .map(|end| (end, EntityLabel::Quantity))
            .or_else(|| time_span(tokens, i));

        match span {
            Some((end, label)) => {
                for (k, token) in tokens[i..=end].iter_mut().enumerate() {
                    token.entity = Some(EntityTag {
                        label,
                        begins: k == 0,
                    });
                }
                i = end + 1;
            }
            None => i += 1,
        }
    }
}

fn temperature_span(tokens: &[TaggedToken], start: usize) -> Option<usize> {
    let is_scale = |idx: usize| {
        tokens
            .get(idx)
            .is_some_and(|t| TEMPERATURE_SCALES.contains(&t.surface.as_str()))
    };

    let first = &tokens[start];
    if TEMPERATURE_TOKEN_RE.is_match(&first.surface) {
        return Some(if is_scale(start + 1) { start + 1 } else { start });
    }
    if !first.like_num() {
        return None;
    }

    let next = tokens.get(start + 1)?;
    if DEGREE_WORDS.contains(&next.surface.to_lowercase().as_str()) {
        Some(if is_scale(start + 2) { start + 2 } else { start + 1 })
    } else if is_scale(start + 1) {
        Some(start + 1)
    } else {
        None
    }
}

fn time_span(tokens: &[TaggedToken], start: usize) -> Option<(usize, EntityLabel)> {
    let first = &tokens[start];
    if first.lemma == "overnight" {
        return Some((start, EntityLabel::Date));
    }
    if !first.like_num() {
        return None;
    }

    // Absorb ranges ("10 to 15", "10 - 15") and mixed numbers ("1 1/2")
    let mut end = start;
    loop {
        match (tokens.get(end + 1), tokens.get(end + 2)) {
            (Some(joiner), Some(number))
                if RANGE_WORDS.contains(&joiner.lemma.as_str()) && number.like_num() =>
            {
                end += 2;
            }
            (Some(number), _) if number.like_num() => end += 1,
            _ => break,
        }
    }

    let unit = tokens.get(end + 1)?.surface.to_lowercase();
    if TIME_UNITS.contains(&unit.as_str()) {
        Some((end + 1, EntityLabel::Time))
    } else if DATE_UNITS.contains(&unit.as_str()) {
        Some((end + 1, EntityLabel::Date))
    } else {
        None
    }
}
