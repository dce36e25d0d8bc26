use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashSet;

/// Vocabulary and pass configuration for the step parser
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StepsConfig {
    /// Verbs that mark an action boundary inside a clause
    #[serde(default = "default_cooking_verbs")]
    pub cooking_verbs: Vec<String>,
    /// Nouns reported as tools when a step mentions them
    #[serde(default = "default_tools")]
    pub tools: Vec<String>,
    /// Measurement units recognised next to quantities
    #[serde(default = "default_units")]
    pub units: Vec<String>,
    /// Line prefixes that mark attribution or metadata instead of an instruction
    #[serde(default = "default_non_step_prefixes")]
    pub non_step_prefixes: Vec<String>,
    /// Whether the non-step filter pass runs
    #[serde(default = "default_filter_non_steps")]
    pub filter_non_steps: bool,
}

impl Default for StepsConfig {
    fn default() -> Self {
        Self {
            cooking_verbs: default_cooking_verbs(),
            tools: default_tools(),
            units: default_units(),
            non_step_prefixes: default_non_step_prefixes(),
            filter_non_steps: default_filter_non_steps(),
        }
    }
}

// Default value functions
fn default_cooking_verbs() -> Vec<String> {
    to_strings(&[
        "mix", "combine", "stir", "add", "bake", "cook", "heat", "saute", "marinate", "whisk",
        "chop", "cut", "slice", "pour", "boil", "simmer", "grill", "season", "coat", "rub",
        "transfer", "let", "serve", "place",
    ])
}

fn default_tools() -> Vec<String> {
    to_strings(&[
        "pan", "bowl", "oven", "knife", "pot", "spatula", "sheet", "skillet", "whisk",
    ])
}

fn default_units() -> Vec<String> {
    to_strings(&[
        "teaspoon", "tablespoon", "cup", "clove", "bunch", "pound", "ounce", "gram",
        "kilogram", "pinch", "tsp", "tbsp", "oz", "lb", "lbs", "g", "kg", "ml",
    ])
}

fn default_non_step_prefixes() -> Vec<String> {
    to_strings(&["recipe by", "recipe developed by", "author:"])
}

fn default_filter_non_steps() -> bool {
    true
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl StepsConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_STEPS__ prefix
    /// 2. recipe_steps.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_STEPS__COOKING_VERBS=mix,stir,fold
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Lowercased lookup sets built from this configuration
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary {
            cooking_verbs: lowercase_set(&self.cooking_verbs),
            tools: lowercase_set(&self.tools),
            units: lowercase_set(&self.units),
            non_step_prefixes: self
                .non_step_prefixes
                .iter()
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }
}

fn lowercase_set(words: &[String]) -> HashSet<String> {
    words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Case-insensitive vocabularies shared by every pipeline stage
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    pub cooking_verbs: HashSet<String>,
    pub tools: HashSet<String>,
    pub units: HashSet<String>,
    pub non_step_prefixes: Vec<String>,
}

impl Vocabulary {
    pub fn is_cooking_verb(&self, word: &str) -> bool {
        self.cooking_verbs.contains(word)
    }

    pub fn is_tool(&self, word: &str) -> bool {
        self.tools.contains(word)
    }

    pub fn is_unit(&self, word: &str) -> bool {
        self.units.contains(word)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_STEPS__ prefix
/// 2. recipe_steps.toml file in current directory
/// 3. Default values
pub fn load_config() -> Result<StepsConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe_steps").required(false))
        // Use double underscore for nested keys and commas inside list values
        .add_source(
            Environment::with_prefix("RECIPE_STEPS")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cooking_verbs")
                .with_list_parse_key("tools")
                .with_list_parse_key("units")
                .with_list_parse_key("non_step_prefixes"),
        )
        .build()?;

    settings.try_deserialize()
}
