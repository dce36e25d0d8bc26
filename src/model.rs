use crate::error::StepsError;
use html_escape::decode_html_entities;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Raw recipe record handed over by the scraping/parsing collaborator.
///
/// Every field is optional on the wire; missing or `null` lists become empty
/// and a missing title falls back to "Untitled Recipe".
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawRecipe {
    #[serde(default = "default_title", deserialize_with = "title_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "list_or_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "list_or_empty")]
    pub steps: Vec<String>,
    #[serde(default)]
    pub servings: Option<Servings>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub cook_time: Option<String>,
    #[serde(default)]
    pub total_time: Option<String>,
}

impl Default for RawRecipe {
    fn default() -> Self {
        Self {
            title: default_title(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            servings: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
        }
    }
}

/// Servings as found in the wild: "4 servings", ["4", "4 servings"] or 4
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Servings {
    Text(String),
    Number(serde_json::Number),
    List(Vec<String>),
}

impl Servings {
    /// Single servings text; lists contribute their first entry
    pub fn as_text(&self) -> Option<String> {
        let text = match self {
            Servings::Text(s) => s.trim().to_string(),
            Servings::Number(n) => n.to_string(),
            Servings::List(items) => items.first().map(|s| s.trim().to_string())?,
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

fn default_title() -> String {
    "Untitled Recipe".to_string()
}

fn title_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_title))
}

fn list_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn decode_html_symbols(text: &str) -> String {
    // scraped text is sometimes double-encoded (&amp;frac12;)
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| decode_html_symbols(v.trim()))
        .filter(|v| !v.is_empty())
}

impl RawRecipe {
    /// Decode a record from JSON
    pub fn from_json(json: &str) -> Result<Self, StepsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Normalize the record once at the pipeline boundary: decode HTML
    /// entities, trim whitespace and drop blank ingredient and step lines.
    pub fn sanitized(self) -> Self {
        let clean_lines = |lines: Vec<String>| -> Vec<String> {
            lines
                .into_iter()
                .map(|line| decode_html_symbols(line.trim()).trim().to_string())
                .filter(|line| !line.is_empty())
                .collect()
        };

        let title = decode_html_symbols(self.title.trim());
        Self {
            title: if title.is_empty() {
                default_title()
            } else {
                title
            },
            ingredients: clean_lines(self.ingredients),
            steps: clean_lines(self.steps),
            servings: self.servings,
            prep_time: clean_optional(self.prep_time),
            cook_time: clean_optional(self.cook_time),
            total_time: clean_optional(self.total_time),
        }
    }
}

/// One ingredient, either a recipe-level entry or a step-local override
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ingredient {
    pub raw: String,
    /// Normalized head noun; `None` means the ingredient can't be grounded
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub descriptor: Option<String>,
    pub preparation: Option<String>,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [
            self.quantity.as_deref(),
            self.unit.as_deref(),
            self.descriptor.as_deref(),
            self.name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            write!(f, "{}", self.raw)?;
        } else {
            write!(f, "{}", parts.join(" "))?;
        }
        if let Some(prep) = &self.preparation {
            write!(f, ", {}", prep)?;
        }
        Ok(())
    }
}

/// A single numbered, single-action cooking step
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Step {
    pub number: usize,
    pub text: String,
    pub ingredients: Vec<Ingredient>,
    /// Unique, in order of first mention
    pub tools: Vec<String>,
    pub methods_primary: Vec<String>,
    pub methods_secondary: Vec<String>,
    pub time: Option<String>,
    pub temperature: Option<String>,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Step {}: {}", self.number, self.text)?;
        for ingredient in &self.ingredients {
            writeln!(f, "  - {}", ingredient)?;
        }
        if !self.tools.is_empty() {
            writeln!(f, "  tools: {}", self.tools.join(", "))?;
        }
        let methods: Vec<&str> = self
            .methods_primary
            .iter()
            .chain(&self.methods_secondary)
            .map(String::as_str)
            .collect();
        if !methods.is_empty() {
            writeln!(f, "  methods: {}", methods.join(", "))?;
        }
        if let Some(time) = &self.time {
            writeln!(f, "  time: {}", time)?;
        }
        if let Some(temperature) = &self.temperature {
            writeln!(f, "  temperature: {}", temperature)?;
        }
        Ok(())
    }
}

/// Fully structured recipe
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub servings: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub total_time: Option<String>,
}

impl Recipe {
    /// Pretty-printed JSON for handing the recipe to a consumer
    pub fn to_json_pretty(&self) -> Result<String, StepsError> {
        serde_json::to_string_pretty(self).map_err(StepsError::Output)
    }

    /// Look up a step by its 1-based number
    pub fn step(&self, number: usize) -> Option<&Step> {
        number.checked_sub(1).and_then(|idx| self.steps.get(idx))
    }

    /// For each step, the recipe ingredient lines it uses with any trailing
    /// preparation note (", minced") cut off
    pub fn ingredients_by_step(&self) -> Vec<Vec<String>> {
        self.steps
            .iter()
            .map(|step| {
                step.ingredients
                    .iter()
                    .filter_map(|used| {
                        self.ingredients
                            .iter()
                            .find(|master| master.name.is_some() && master.name == used.name)
                            .map(|master| clean_ingredient_line(&master.raw))
                    })
                    .collect()
            })
            .collect()
    }

    /// Every ingredient line used by some step, de-duplicated in order of first use
    pub fn ingredients_in_use(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for line in self.ingredients_by_step().into_iter().flatten() {
            if !seen.contains(&line) {
                seen.push(line);
            }
        }
        seen
    }
}

fn clean_ingredient_line(raw: &str) -> String {
    raw.split(',').next().unwrap_or(raw).trim().to_string()
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        let metadata = [
            ("servings", &self.servings),
            ("prep time", &self.prep_time),
            ("cook time", &self.cook_time),
            ("total time", &self.total_time),
        ];
        for (label, value) in metadata {
            if let Some(value) = value {
                writeln!(f, "{}: {}", label, value)?;
            }
        }

        writeln!(f)?;
        for ingredient in &self.ingredients {
            writeln!(f, "- {}", ingredient.raw)?;
        }
        writeln!(f)?;
        for step in &self.steps {
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
