use crate::config::Vocabulary;
use crate::ingredients::{is_unit_token, name_pattern, unit_form};
use crate::model::Ingredient;
use crate::tagger::TaggedToken;
use log::trace;
use regex::Regex;

/// How many tokens before an ingredient mention may carry its quantity or unit
pub const LOOK_BACK_WINDOW: usize = 5;

/// Attaches recipe-level ingredients to the steps that mention them
pub struct IngredientGrounder {
    ingredients: Vec<Ingredient>,
    matchers: Vec<(usize, String, Regex)>,
}

impl IngredientGrounder {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        let matchers = ingredients
            .iter()
            .enumerate()
            .filter_map(|(idx, ingredient)| {
                let name = ingredient.name.as_deref()?;
                name_pattern(name).map(|re| (idx, name.to_string(), re))
            })
            .collect();
        Self {
            ingredients,
            matchers,
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Ingredients mentioned by one step, in master-list order.
    ///
    /// A quantity or unit restated right before the mention yields a
    /// step-local copy; the master list is never modified.
    pub fn ground(&self, text: &str, tokens: &[TaggedToken], vocab: &Vocabulary) -> Vec<Ingredient> {
        let mut grounded = Vec::new();

        for (idx, name, re) in &self.matchers {
            let master = &self.ingredients[*idx];
            if !re.is_match(text) {
                trace!("'{}' not mentioned in '{}'", name, text);
                continue;
            }

            let grounded_ingredient = match mention_index(tokens, name) {
                Some(at) => step_local_amount(tokens, at, vocab)
                    .map(|(quantity, unit)| override_amount(master, name, quantity, unit))
                    .unwrap_or_else(|| master.clone()),
                None => master.clone(),
            };
            grounded.push(grounded_ingredient);
        }

        grounded
    }
}

fn mention_index(tokens: &[TaggedToken], name: &str) -> Option<usize> {
    tokens
        .iter()
        .position(|t| t.lemma.eq_ignore_ascii_case(name) || t.surface.eq_ignore_ascii_case(name))
}

/// Quantity and unit found in the look-back window before `at`; `None` when
/// neither is present. The closest match wins for each.
fn step_local_amount(
    tokens: &[TaggedToken],
    at: usize,
    vocab: &Vocabulary,
) -> Option<(Option<String>, Option<String>)> {
    let window = &tokens[at.saturating_sub(LOOK_BACK_WINDOW)..at];

    let quantity = window
        .iter()
        .rev()
        .find(|t| t.like_num())
        .map(|t| t.surface.clone());
    let unit = window
        .iter()
        .rev()
        .find(|t| is_unit_token(t, vocab))
        .map(unit_form);

    if quantity.is_none() && unit.is_none() {
        None
    } else {
        Some((quantity, unit))
    }
}

fn override_amount(
    master: &Ingredient,
    name: &str,
    quantity: Option<String>,
    unit: Option<String>,
) -> Ingredient {
    let unit = unit.or_else(|| master.unit.clone());
    let raw = [quantity.as_deref(), unit.as_deref(), Some(name)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    Ingredient {
        raw,
        name: Some(name.to_string()),
        quantity,
        unit,
        descriptor: master.descriptor.clone(),
        preparation: master.preparation.clone(),
    }
}
