use crate::config::Vocabulary;
use crate::tagger::{entity_spans, EntityLabel, TaggedToken};

/// Signals read off one tagged step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepFeatures {
    /// First verb lemma, if any
    pub methods_primary: Vec<String>,
    pub methods_secondary: Vec<String>,
    pub tools: Vec<String>,
    pub time: Option<String>,
    pub temperature: Option<String>,
}

/// Extract action verbs, tools, time and temperature from a tagged step
pub fn extract_features(tokens: &[TaggedToken], vocab: &Vocabulary) -> StepFeatures {
    let mut verbs = tokens
        .iter()
        .filter(|t| t.is_verb())
        .map(|t| t.lemma.to_lowercase());
    let methods_primary: Vec<String> = verbs.next().into_iter().collect();
    let methods_secondary: Vec<String> = verbs.collect();

    let mut tools: Vec<String> = Vec::new();
    for token in tokens.iter().filter(|t| t.is_noun()) {
        let surface = token.surface.to_lowercase();
        if (vocab.is_tool(&surface) || vocab.is_tool(&token.lemma)) && !tools.contains(&surface) {
            tools.push(surface);
        }
    }

    let spans = entity_spans(tokens);
    let time = spans
        .iter()
        .find(|s| matches!(s.label, EntityLabel::Time | EntityLabel::Date))
        .map(|s| s.text.clone());
    let temperature = spans
        .iter()
        .find(|s| s.label == EntityLabel::Quantity || s.text.contains('°'))
        .map(|s| s.text.clone());

    StepFeatures {
        methods_primary,
        methods_secondary,
        tools,
        time,
        temperature,
    }
}
