//! Segment free-text recipe instructions into atomic, numbered cooking steps,
//! each grounded in the recipe's ingredient list.
//!
//! ```
//! use recipe_steps::{parse_recipe, RawRecipe};
//!
//! let raw = RawRecipe {
//!     ingredients: vec!["chicken breast".to_string()],
//!     steps: vec!["Season the chicken breast. Cook it for 10 minutes.".to_string()],
//!     ..Default::default()
//! };
//! let recipe = parse_recipe(raw);
//! assert_eq!(recipe.steps[1].text, "Cook breast for 10 minutes");
//! assert_eq!(recipe.steps[1].time.as_deref(), Some("10 minutes"));
//! ```

pub mod builder;
pub mod config;
pub mod duration;
pub mod error;
pub mod features;
pub mod grounding;
pub mod ingredients;
pub mod model;
pub mod pipeline;
pub mod record;
pub mod segmentation;
pub mod tagger;

pub use builder::StepParserBuilder;
pub use config::{StepsConfig, Vocabulary};
pub use duration::{convert_duration, humanize_duration};
pub use error::StepsError;
pub use model::{Ingredient, RawRecipe, Recipe, Servings, Step};
pub use pipeline::StepParser;
pub use tagger::{LexiconTagger, PartOfSpeech, TaggedToken, Tagger};

/// Parse a record with the default vocabularies and the lexicon tagger
pub fn parse_recipe(raw: RawRecipe) -> Recipe {
    StepParser::new().parse(raw)
}

/// Decode a JSON record and parse it with the default vocabularies
pub fn parse_recipe_json(json: &str) -> Result<Recipe, StepsError> {
    StepParser::new().parse_json(json)
}
