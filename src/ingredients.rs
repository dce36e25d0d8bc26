use crate::config::Vocabulary;
use crate::model::Ingredient;
use crate::tagger::{PartOfSpeech, TaggedToken, Tagger};
use log::warn;
use regex::Regex;

const TO_TASTE: &str = "to taste";

/// Parse a free-text ingredient line such as "2 cloves garlic, minced".
///
/// Text after the first comma (or a trailing "to taste") is the preparation
/// note; the rest is tagged to find the quantity, unit, name and descriptor.
/// `name` depends on `raw` only, so the same line always grounds the same way.
pub fn parse_ingredient<T: Tagger + ?Sized>(
    raw: &str,
    tagger: &T,
    vocab: &Vocabulary,
) -> Ingredient {
    let raw = raw.trim();
    let (main, mut preparation) = match raw.split_once(',') {
        Some((main, rest)) => (main.trim(), non_empty(rest.trim())),
        None => (raw, None),
    };
    let main = match strip_to_taste(main) {
        Some(stripped) => {
            preparation.get_or_insert_with(|| TO_TASTE.to_string());
            stripped
        }
        None => main,
    };

    let tokens = tagger.tag(main);
    let name_index = tokens
        .iter()
        .rposition(|t| t.is_noun() && !is_unit_token(t, vocab));

    let descriptor: Vec<&str> = tokens
        .iter()
        .enumerate()
        .filter(|(i, t)| Some(*i) != name_index && is_descriptive(t, vocab))
        .map(|(_, t)| t.surface.as_str())
        .collect();

    Ingredient {
        raw: raw.to_string(),
        name: name_index.map(|i| tokens[i].lemma.to_lowercase()),
        quantity: leading_quantity(&tokens),
        unit: tokens
            .iter()
            .find(|t| is_unit_token(t, vocab))
            .map(unit_form),
        descriptor: non_empty(&descriptor.join(" ")),
        preparation,
    }
}

/// Normalized identity of an ingredient line: the lemma of its last noun, or
/// the whole lowercased line when the tagger finds no noun.
pub fn head_noun<T: Tagger + ?Sized>(line: &str, tagger: &T) -> String {
    let line = line.trim();
    let main = line.split(',').next().unwrap_or(line).trim();
    let main = strip_to_taste(main).unwrap_or(main);

    tagger
        .tag(main)
        .iter()
        .rev()
        .find(|t| t.is_noun())
        .map(|t| t.lemma.to_lowercase())
        .unwrap_or_else(|| line.to_lowercase())
}

/// Case-insensitive whole-word matcher for a name with an optional plural suffix
pub fn name_pattern(name: &str) -> Option<Regex> {
    let pattern = format!(r"(?i)\b{}(?:es|s)?\b", regex::escape(name));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Cannot build matcher for ingredient '{}': {}", name, e);
            None
        }
    }
}

fn strip_to_taste(text: &str) -> Option<&str> {
    let cut = text.len().checked_sub(TO_TASTE.len())?;
    let tail = text.get(cut..)?;
    if !tail.eq_ignore_ascii_case(TO_TASTE) {
        return None;
    }
    let head = &text[..cut];
    // "to taste" on its own is not a preparation note
    if head.trim().is_empty() || !head.ends_with(char::is_whitespace) {
        return None;
    }
    Some(head.trim_end())
}

pub(crate) fn is_unit_token(token: &TaggedToken, vocab: &Vocabulary) -> bool {
    vocab.is_unit(&token.surface.to_lowercase()) || vocab.is_unit(&token.lemma)
}

pub(crate) fn unit_form(token: &TaggedToken) -> String {
    token.lemma.to_lowercase()
}

fn is_quantity_token(token: &TaggedToken) -> bool {
    token.pos == PartOfSpeech::Numeral || token.like_num()
}

/// First run of consecutive numeric tokens ("1 1/2")
fn leading_quantity(tokens: &[TaggedToken]) -> Option<String> {
    let start = tokens.iter().position(is_quantity_token)?;
    let run: Vec<&str> = tokens[start..]
        .iter()
        .take_while(|t| is_quantity_token(t))
        .map(|t| t.surface.as_str())
        .collect();
    Some(run.join(" "))
}

fn is_descriptive(token: &TaggedToken, vocab: &Vocabulary) -> bool {
    let structural = matches!(
        token.pos,
        PartOfSpeech::Adposition
            | PartOfSpeech::Determiner
            | PartOfSpeech::Conjunction
            | PartOfSpeech::Punctuation
            | PartOfSpeech::Numeral
    );
    !structural && !token.like_num() && !is_unit_token(token, vocab)
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StepsConfig;
    use crate::tagger::LexiconTagger;

    fn parse(raw: &str) -> Ingredient {
        parse_ingredient(raw, &LexiconTagger::new(), &StepsConfig::default().vocabulary())
    }

    #[test]
    fn test_parse_quantity_unit_name_preparation() {
        let ingredient = parse("2 cloves garlic, minced");
        assert_eq!(ingredient.raw, "2 cloves garlic, minced");
        assert_eq!(ingredient.quantity.as_deref(), Some("2"));
        assert_eq!(ingredient.unit.as_deref(), Some("clove"));
        assert_eq!(ingredient.name.as_deref(), Some("garlic"));
        assert_eq!(ingredient.descriptor, None);
        assert_eq!(ingredient.preparation.as_deref(), Some("minced"));
    }

    #[test]
    fn test_parse_descriptor() {
        let ingredient = parse("2 boneless skinless chicken breasts");
        assert_eq!(ingredient.name.as_deref(), Some("breast"));
        assert_eq!(ingredient.descriptor.as_deref(), Some("boneless skinless chicken"));
        assert_eq!(ingredient.unit, None);

        let ingredient = parse("1 teaspoon Italian seasoning");
        assert_eq!(ingredient.name.as_deref(), Some("seasoning"));
        assert_eq!(ingredient.unit.as_deref(), Some("teaspoon"));
        assert_eq!(ingredient.descriptor.as_deref(), Some("Italian"));
    }

    #[test]
    fn test_parse_mixed_number_quantity() {
        let ingredient = parse("1 1/2 cups flour");
        assert_eq!(ingredient.quantity.as_deref(), Some("1 1/2"));
        assert_eq!(ingredient.unit.as_deref(), Some("cup"));
        assert_eq!(ingredient.name.as_deref(), Some("flour"));
    }

    #[test]
    fn test_to_taste_is_preparation() {
        let ingredient = parse("Salt and pepper to taste");
        assert_eq!(ingredient.name.as_deref(), Some("pepper"));
        assert_eq!(ingredient.preparation.as_deref(), Some("to taste"));
        assert_eq!(ingredient.quantity, None);

        let ingredient = parse("salt, to taste");
        assert_eq!(ingredient.name.as_deref(), Some("salt"));
        assert_eq!(ingredient.preparation.as_deref(), Some("to taste"));
    }

    #[test]
    fn test_unit_only_line_has_no_name() {
        let ingredient = parse("2 cups");
        assert_eq!(ingredient.name, None);
        assert_eq!(ingredient.unit.as_deref(), Some("cup"));
    }

    #[test]
    fn test_name_is_deterministic() {
        assert_eq!(parse("3 ripe tomatoes").name, parse("3 ripe tomatoes").name);
        assert_eq!(parse("3 ripe tomatoes").name.as_deref(), Some("tomato"));
    }

    #[test]
    fn test_head_noun() {
        let tagger = LexiconTagger::new();
        assert_eq!(head_noun("chicken breast", &tagger), "breast");
        assert_eq!(head_noun("2 cloves garlic, minced", &tagger), "garlic");
        assert_eq!(head_noun("2 large eggs", &tagger), "egg");
        // no noun at all: the lowercased line itself
        assert_eq!(head_noun("Some", &tagger), "some");
    }

    #[test]
    fn test_name_pattern_matches_whole_words_and_plurals() {
        let re = name_pattern("tomato").unwrap();
        assert!(re.is_match("Dice the tomatoes"));
        assert!(re.is_match("add one Tomato"));
        assert!(!re.is_match("add the tomatillos"));

        let re = name_pattern("egg").unwrap();
        assert!(re.is_match("beat the eggs"));
        assert!(!re.is_match("slice the eggplant"));
    }
}
