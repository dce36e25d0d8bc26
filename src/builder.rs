use crate::config::StepsConfig;
use crate::pipeline::StepParser;
use crate::tagger::{LexiconTagger, Tagger};

/// Builder for configuring a [`StepParser`]
#[derive(Debug, Clone, Default)]
pub struct StepParserBuilder {
    config: StepsConfig,
}

impl StepParserBuilder {
    /// Start from an existing configuration, e.g. one from [`StepsConfig::load`]
    ///
    /// # Example
    /// ```
    /// use recipe_steps::{StepParser, StepsConfig};
    ///
    /// let parser = StepParser::builder()
    ///     .config(StepsConfig::default())
    ///     .build();
    /// ```
    pub fn config(mut self, config: StepsConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the cooking verbs that mark step boundaries
    ///
    /// # Example
    /// ```
    /// use recipe_steps::StepParser;
    ///
    /// let parser = StepParser::builder()
    ///     .cooking_verbs(["mix", "fold", "bake"])
    ///     .build();
    /// assert!(parser.vocabulary().is_cooking_verb("fold"));
    /// ```
    pub fn cooking_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.cooking_verbs = verbs.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the tool vocabulary
    pub fn tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.tools = tools.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the unit vocabulary used for quantity look-back
    pub fn units<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.units = units.into_iter().map(Into::into).collect();
        self
    }

    pub fn non_step_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.non_step_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Turn the attribution-line filter on or off
    pub fn filter_non_steps(mut self, enabled: bool) -> Self {
        self.config.filter_non_steps = enabled;
        self
    }

    /// Build a parser backed by the lexicon tagger
    pub fn build(self) -> StepParser<LexiconTagger> {
        StepParser::with_config(self.config)
    }

    /// Build a parser backed by a custom tagger
    ///
    /// # Example
    /// ```
    /// use recipe_steps::{LexiconTagger, StepParser};
    ///
    /// let parser = StepParser::builder()
    ///     .filter_non_steps(false)
    ///     .build_with_tagger(LexiconTagger::new());
    /// assert!(!parser.config().filter_non_steps);
    /// ```
    pub fn build_with_tagger<T: Tagger>(self, tagger: T) -> StepParser<T> {
        StepParser::with_tagger(self.config, tagger)
    }
}
