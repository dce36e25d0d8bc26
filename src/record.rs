use crate::duration::humanize_duration;
use crate::features::StepFeatures;
use crate::model::{Ingredient, RawRecipe, Recipe, Servings, Step};

/// One segmented step with everything extracted for it, not yet numbered
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedStep {
    pub text: String,
    pub features: StepFeatures,
    pub ingredients: Vec<Ingredient>,
}

impl AnnotatedStep {
    pub fn into_step(self, number: usize) -> Step {
        Step {
            number,
            text: self.text,
            ingredients: self.ingredients,
            tools: self.features.tools,
            methods_primary: self.features.methods_primary,
            methods_secondary: self.features.methods_secondary,
            time: self.features.time,
            temperature: self.features.temperature,
        }
    }
}

/// Assemble the final recipe. Steps are numbered 1..=N in the order given.
pub fn build_recipe(
    raw: &RawRecipe,
    ingredients: Vec<Ingredient>,
    steps: Vec<AnnotatedStep>,
) -> Recipe {
    let steps = steps
        .into_iter()
        .enumerate()
        .map(|(idx, step)| step.into_step(idx + 1))
        .collect();

    Recipe {
        title: raw.title.clone(),
        ingredients,
        steps,
        servings: raw.servings.as_ref().and_then(Servings::as_text),
        prep_time: humanize_duration(raw.prep_time.as_deref()),
        cook_time: humanize_duration(raw.cook_time.as_deref()),
        total_time: humanize_duration(raw.total_time.as_deref()),
    }
}
