use recipe_steps::{
    convert_duration, humanize_duration, parse_recipe, parse_recipe_json, RawRecipe, StepsError,
};

#[test]
fn test_empty_record() {
    let recipe = parse_recipe_json("{}").unwrap();
    assert_eq!(recipe.title, "Untitled Recipe");
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.steps.is_empty());
    assert!(recipe.servings.is_none());
    assert!(recipe.total_time.is_none());
}

#[test]
fn test_null_fields() {
    let recipe = parse_recipe_json(
        r#"{"title": null, "ingredients": null, "steps": null, "servings": null, "cook_time": null}"#,
    )
    .unwrap();
    assert_eq!(recipe.title, "Untitled Recipe");
    assert!(recipe.steps.is_empty());
    assert!(recipe.cook_time.is_none());
}

#[test]
fn test_invalid_record() {
    let result = parse_recipe_json(r#"{"ingredients": "flour"}"#);
    assert!(matches!(result, Err(StepsError::InvalidRecord(_))));
    assert!(parse_recipe_json("").is_err());
}

#[test]
fn test_blank_lines_are_ignored() {
    let recipe = parse_recipe(RawRecipe {
        ingredients: vec!["  ".to_string(), "1 cup rice".to_string()],
        steps: vec!["".to_string(), "   ".to_string(), "Rinse the rice.".to_string()],
        ..Default::default()
    });
    assert_eq!(recipe.ingredients.len(), 1);
    assert_eq!(recipe.steps.len(), 1);
    assert_eq!(recipe.steps[0].number, 1);
}

#[test]
fn test_step_without_signals() {
    let recipe = parse_recipe(RawRecipe {
        steps: vec!["Enjoy with friends.".to_string()],
        ..Default::default()
    });
    let step = &recipe.steps[0];
    assert_eq!(step.text, "Enjoy with friends");
    assert!(step.ingredients.is_empty());
    assert!(step.tools.is_empty());
    assert!(step.methods_primary.is_empty());
    assert!(step.time.is_none());
    assert!(step.temperature.is_none());
}

#[test]
fn test_pronoun_without_antecedent_is_kept() {
    let recipe = parse_recipe(RawRecipe {
        ingredients: vec!["2 carrots".to_string()],
        steps: vec!["Stir it well. Peel the carrots.".to_string()],
        ..Default::default()
    });
    assert_eq!(recipe.steps[0].text, "Stir it well");
    assert_eq!(recipe.steps[1].ingredients[0].name.as_deref(), Some("carrot"));
}

#[test]
fn test_trailing_header_is_not_dropped() {
    let recipe = parse_recipe(RawRecipe {
        steps: vec!["Mix the flour.".to_string(), "For serving:".to_string()],
        ..Default::default()
    });
    let texts: Vec<&str> = recipe.steps.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["Mix the flour", "For serving:"]);
}

#[test]
fn test_html_entities_are_decoded() {
    let recipe = parse_recipe(RawRecipe {
        title: "Mac &amp; Cheese".to_string(),
        ingredients: vec!["&frac12; cup milk".to_string()],
        steps: vec!["Pour the milk &amp; cream into the pot.".to_string()],
        ..Default::default()
    });
    assert_eq!(recipe.title, "Mac & Cheese");
    assert_eq!(recipe.ingredients[0].quantity.as_deref(), Some("½"));
    assert_eq!(recipe.steps[0].text, "Pour the milk & cream into the pot");
    assert_eq!(recipe.steps[0].tools, vec!["pot"]);
}

#[test]
fn test_durations() {
    assert_eq!(convert_duration("PT1H30M").as_deref(), Some("1 hour 30 minutes"));
    assert_eq!(convert_duration("PT55M").as_deref(), Some("55 minutes"));
    assert_eq!(humanize_duration(None), None);
    assert_eq!(convert_duration("overnight").as_deref(), Some("overnight"));

    let recipe = parse_recipe(RawRecipe {
        prep_time: Some("PT10M".to_string()),
        cook_time: Some("45 minutes".to_string()),
        total_time: Some("PT".to_string()),
        ..Default::default()
    });
    assert_eq!(recipe.prep_time.as_deref(), Some("10 minutes"));
    assert_eq!(recipe.cook_time.as_deref(), Some("45 minutes"));
    assert_eq!(recipe.total_time, None);
}

#[test]
fn test_display_summary() {
    let recipe = parse_recipe(RawRecipe {
        title: "Toast".to_string(),
        ingredients: vec!["2 slices bread".to_string()],
        steps: vec!["Toast the bread for 2 minutes.".to_string()],
        ..Default::default()
    });
    let text = recipe.to_string();
    assert!(text.starts_with("Toast\n"));
    assert!(text.contains("- 2 slices bread"));
    assert!(text.contains("Step 1: Toast the bread for 2 minutes"));
    assert!(text.contains("  time: 2 minutes"));
}
