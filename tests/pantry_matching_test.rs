use cookify_pantry::core::matcher::{is_satisfied, normalized_pantry};
use cookify_pantry::{match_recipes, normalize, BuiltinCatalog, MatchMode, PantryMatcher, RecipeRequirement};

fn grilled_chicken() -> RecipeRequirement {
    RecipeRequirement::new(
        "r1",
        "Grilled Chicken with Salad",
        "Lunch",
        "https://i.imgur.com/s5rzogv.jpeg",
        &["garlic", "lemon juice"],
    )
}

fn haleem() -> RecipeRequirement {
    RecipeRequirement::new(
        "r2",
        "Haleem",
        "Dinner",
        "https://i.imgur.com/wEBHkJT.jpeg",
        &["cracked wheat", "beef"],
    )
}

fn ids(results: &[cookify_pantry::MatchResult]) -> Vec<String> {
    results.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize("  Lemon   Juice "), "lemon juice");

    let samples = ["", " ", "GARLIC", "  Cracked \t Wheat\n", "lemon juice", "ÄPFEL  Saft"];
    for s in samples {
        assert_eq!(normalize(&normalize(s)), normalize(s), "not idempotent for {:?}", s);
        let n = normalize(s);
        assert!(!n.starts_with(' ') && !n.ends_with(' '));
        assert!(!n.contains("  "));
    }
}

#[test]
fn test_empty_inputs_yield_no_matches() {
    let no_pantry: Vec<String> = Vec::new();
    assert!(match_recipes(&no_pantry, &[grilled_chicken(), haleem()]).is_empty());
    assert!(match_recipes(&["garlic", "beef"], &[]).is_empty());
}

#[test]
fn test_vacuous_recipe_matches_any_pantry() {
    let water = RecipeRequirement::new("r0", "Water", "Drinks", "", &[]);
    for pantry in [vec!["garlic"], vec!["chicken", "rice"], vec!["   "]] {
        assert_eq!(ids(&match_recipes(&pantry, &[water.clone()])), vec!["r0"]);
    }
}

#[test]
fn test_case_and_whitespace_on_pantry_side() {
    let result = match_recipes(&["Garlic cloves", "  LEMON JUICE  "], &[grilled_chicken()]);
    assert_eq!(ids(&result), vec!["r1"]);
}

#[test]
fn test_unsatisfied_requirement() {
    let steak = RecipeRequirement::new("r3", "Steak", "Dinner", "", &["beef"]);
    assert!(match_recipes(&["chicken", "rice"], &[steak]).is_empty());
}

#[test]
fn test_result_order_is_catalog_order() {
    let pantry = ["lemon juice", "beef", "garlic", "cracked wheat"];
    assert_eq!(ids(&match_recipes(&pantry, &[grilled_chicken(), haleem()])), vec!["r1", "r2"]);
    assert_eq!(ids(&match_recipes(&pantry, &[haleem(), grilled_chicken()])), vec!["r2", "r1"]);
}

#[test]
fn test_concrete_scenario() {
    let result = match_recipes(&["garlic", "lemon juice"], &[grilled_chicken(), haleem()]);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "r1");
    assert_eq!(result[0].name, "Grilled Chicken with Salad");
    assert_eq!(result[0].category, "Lunch");
    assert_eq!(result[0].image_ref, "https://i.imgur.com/s5rzogv.jpeg");
}

#[test]
fn test_requirement_order_does_not_matter() {
    let forward = normalized_pantry(&["beef", "cracked wheat"]);
    assert!(is_satisfied(&forward, &["cracked wheat", "beef"]));
    assert!(is_satisfied(&forward, &["beef", "cracked wheat"]));
}

#[test]
fn test_builtin_catalog_suggestions() {
    let catalog = BuiltinCatalog::entries();

    let only_lunch = match_recipes(&["Garlic", "Lemon Juice"], &catalog);
    assert_eq!(ids(&only_lunch), vec!["recipe_1"]);

    let both = match_recipes(&["garlic", "lemon juice", "cracked wheat", "ground beef"], &catalog);
    assert_eq!(ids(&both), vec!["recipe_1", "recipe_2"]);
}

#[test]
fn test_exact_mode_is_opt_in() {
    let catalog = [RecipeRequirement::new("r4", "Ratatouille", "Dinner", "", &["eggplant"])];

    assert_eq!(ids(&match_recipes(&["egg"], &catalog)), vec!["r4"]);
    assert!(PantryMatcher::new(MatchMode::Exact).match_recipes(&["egg"], &catalog).is_empty());
    assert_eq!(
        ids(&PantryMatcher::new(MatchMode::Exact).match_recipes(&["Eggplant"], &catalog)),
        vec!["r4"]
    );
}
