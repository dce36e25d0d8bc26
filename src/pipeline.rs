use std::sync::Arc;

use log::debug;

use crate::builder::StepParserBuilder;
use crate::config::{StepsConfig, Vocabulary};
use crate::error::StepsError;
use crate::features::extract_features;
use crate::grounding::IngredientGrounder;
use crate::ingredients::parse_ingredient;
use crate::model::{Ingredient, RawRecipe, Recipe};
use crate::record::{build_recipe, AnnotatedStep};
use crate::segmentation::segment_instructions;
use crate::tagger::{LexiconTagger, Tagger};

/// Turns raw recipe records into structured recipes with atomic, grounded steps
#[derive(Debug, Clone)]
pub struct StepParser<T = LexiconTagger> {
    config: StepsConfig,
    vocab: Vocabulary,
    tagger: T,
}

impl StepParser<LexiconTagger> {
    /// Parser with the built-in vocabularies and the lexicon tagger
    pub fn new() -> Self {
        Self::with_config(StepsConfig::default())
    }

    /// The lexicon tagger learns the configured cooking verbs as verbs
    pub fn with_config(config: StepsConfig) -> Self {
        let tagger = LexiconTagger::new().with_verbs(&config.cooking_verbs);
        Self::with_tagger(config, tagger)
    }

    /// Parser configured from `recipe_steps.toml` and `RECIPE_STEPS__*` variables
    pub fn load() -> Result<Self, StepsError> {
        Ok(Self::with_config(StepsConfig::load()?))
    }

    pub fn builder() -> StepParserBuilder {
        StepParserBuilder::default()
    }
}

impl Default for StepParser<LexiconTagger> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tagger> StepParser<T> {
    pub fn with_tagger(config: StepsConfig, tagger: T) -> Self {
        let vocab = config.vocabulary();
        Self {
            config,
            vocab,
            tagger,
        }
    }

    pub fn config(&self) -> &StepsConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    /// Parse every ingredient line into the master ingredient list
    pub fn parse_ingredients(&self, lines: &[String]) -> Vec<Ingredient> {
        lines
            .iter()
            .map(|line| parse_ingredient(line, &self.tagger, &self.vocab))
            .collect()
    }

    /// Atomic step texts for a record, in order
    pub fn segment(&self, raw: &RawRecipe) -> Vec<String> {
        segment_instructions(
            &raw.steps,
            &raw.ingredients,
            &self.vocab,
            &self.tagger,
            self.config.filter_non_steps,
        )
    }

    /// Tag one step and read its features and ingredients
    pub fn annotate(&self, text: String, grounder: &IngredientGrounder) -> AnnotatedStep {
        let tokens = self.tagger.tag(&text);
        let features = extract_features(&tokens, &self.vocab);
        let ingredients = grounder.ground(&text, &tokens, &self.vocab);
        AnnotatedStep {
            text,
            features,
            ingredients,
        }
    }

    /// Run the whole pipeline on one record
    pub fn parse(&self, raw: RawRecipe) -> Recipe {
        let raw = raw.sanitized();
        let grounder = IngredientGrounder::new(self.parse_ingredients(&raw.ingredients));

        let steps: Vec<AnnotatedStep> = self
            .segment(&raw)
            .into_iter()
            .map(|text| self.annotate(text, &grounder))
            .collect();

        debug!("Parsed '{}' into {} steps", raw.title, steps.len());
        build_recipe(&raw, grounder.ingredients().to_vec(), steps)
    }

    /// Decode a JSON record and parse it
    pub fn parse_json(&self, json: &str) -> Result<Recipe, StepsError> {
        Ok(self.parse(RawRecipe::from_json(json)?))
    }
}

impl<T: Tagger + Send + Sync + 'static> StepParser<T> {
    /// Like [`StepParser::parse`], with per-step tagging and grounding run on
    /// blocking worker threads.
    ///
    /// Segmentation stays sequential because coreference depends on the
    /// order of steps. Results are collected in step order.
    pub async fn parse_concurrent(self: Arc<Self>, raw: RawRecipe) -> Result<Recipe, StepsError> {
        let raw = raw.sanitized();
        let grounder = Arc::new(IngredientGrounder::new(
            self.parse_ingredients(&raw.ingredients),
        ));

        let handles: Vec<_> = self
            .segment(&raw)
            .into_iter()
            .map(|text| {
                let parser = Arc::clone(&self);
                let grounder = Arc::clone(&grounder);
                tokio::task::spawn_blocking(move || parser.annotate(text, &grounder))
            })
            .collect();

        let mut steps = Vec::with_capacity(handles.len());
        for handle in handles {
            steps.push(handle.await?);
        }

        debug!("Parsed '{}' into {} steps on worker threads", raw.title, steps.len());
        Ok(build_recipe(&raw, grounder.ingredients().to_vec(), steps))
    }
}
