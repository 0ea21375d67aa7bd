use crate::domain::model::{MatchResult, RecipeDetails, RecipeRequirement, SubstituteItem};
use crate::utils::error::{PantryError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

pub fn render_matches(matches: &[MatchResult], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(matches)?),
        OutputFormat::Csv => to_csv(matches),
        OutputFormat::Table => {
            if matches.is_empty() {
                return Ok("No recipes found for your pantry items".to_string());
            }
            let mut lines = vec![format!("Found {} suggested recipes", matches.len())];
            for m in matches {
                lines.push(format!("  {:<12} {:<32} {}", m.id, m.name, m.category));
            }
            Ok(lines.join("\n"))
        }
    }
}

pub fn render_recipes(recipes: &[&RecipeRequirement], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(recipes)?),
        OutputFormat::Csv => {
            let rows: Vec<MatchResult> = recipes.iter().map(|r| MatchResult::from(*r)).collect();
            to_csv(&rows)
        }
        OutputFormat::Table => {
            let mut lines = vec![format!("Showing {} recipes", recipes.len())];
            for r in recipes {
                lines.push(format!("  {:<12} {:<32} {:<10} {}", r.id, r.name, r.category, r.culture));
            }
            Ok(lines.join("\n"))
        }
    }
}

pub fn render_substitutes(items: &[&SubstituteItem], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["name", "amount", "substitutes"])?;
            for item in items {
                writer.write_record([
                    item.name.as_str(),
                    item.amount.as_str(),
                    item.substitutes.join("; ").as_str(),
                ])?;
            }
            finish_csv(writer)
        }
        OutputFormat::Table => {
            let mut lines = vec![format!("Loaded {} substitutes", items.len())];
            for item in items {
                lines.push(format!("  {} ({})", item.name, item.amount));
                for sub in &item.substitutes {
                    lines.push(format!("    - {}", sub));
                }
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Recipe page: title, ingredient list, then numbered steps.
pub fn render_details(details: &RecipeDetails, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(details)?),
        OutputFormat::Csv => {
            // 每個步驟一列
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["id", "name", "step", "instruction"])?;
            for (i, step) in details.instructions.iter().enumerate() {
                writer.write_record([
                    details.id.as_str(),
                    details.name.as_str(),
                    (i + 1).to_string().as_str(),
                    step.as_str(),
                ])?;
            }
            finish_csv(writer)
        }
        OutputFormat::Table => {
            let mut lines = vec![details.name.clone()];
            if !details.image_ref.is_empty() {
                lines.push(format!("  {}", details.image_ref));
            }
            lines.push(String::new());
            lines.push("Ingredients".to_string());
            for ingredient in &details.ingredients {
                lines.push(format!("  - {}", ingredient));
            }
            lines.push(String::new());
            lines.push("Instructions".to_string());
            for (i, step) in details.instructions.iter().enumerate() {
                lines.push(format!("  {} {}", i + 1, step));
            }
            Ok(lines.join("\n"))
        }
    }
}

fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    finish_csv(writer)
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| PantryError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| PantryError::ValidationError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<MatchResult> {
        vec![MatchResult {
            id: "recipe_1".to_string(),
            name: "Grilled Chicken with Salad".to_string(),
            category: "Lunch".to_string(),
            image_ref: "https://i.imgur.com/s5rzogv.jpeg".to_string(),
        }]
    }

    #[test]
    fn test_render_csv_has_header_and_row() {
        let csv = render_matches(&sample(), OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("id,name,category,image_ref"));
        assert_eq!(
            lines.next(),
            Some("recipe_1,Grilled Chicken with Salad,Lunch,https://i.imgur.com/s5rzogv.jpeg")
        );
    }

    #[test]
    fn test_render_json_is_array() {
        let json = render_matches(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], "recipe_1");
    }

    #[test]
    fn test_render_table_empty_message() {
        let table = render_matches(&[], OutputFormat::Table).unwrap();
        assert_eq!(table, "No recipes found for your pantry items");
    }

    fn haleem() -> RecipeDetails {
        RecipeDetails {
            id: "recipe_2".to_string(),
            name: "Haleem".to_string(),
            category: "Dinner".to_string(),
            culture: "Bangladeshi".to_string(),
            image_ref: String::new(),
            ingredients: vec!["cracked wheat".to_string(), "beef".to_string()],
            instructions: vec!["Soak the wheat".to_string(), "Simmer, stirring often".to_string()],
        }
    }

    #[test]
    fn test_render_details_numbers_steps() {
        let table = render_details(&haleem(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Haleem");
        assert!(lines.contains(&"  - beef"));
        assert_eq!(lines[lines.len() - 2], "  1 Soak the wheat");
        assert_eq!(lines[lines.len() - 1], "  2 Simmer, stirring often");
    }

    #[test]
    fn test_render_details_csv_quotes_steps() {
        let csv = render_details(&haleem(), OutputFormat::Csv).unwrap();
        let mut lines = csv.lines().skip(1);
        assert_eq!(lines.next(), Some("recipe_2,Haleem,1,Soak the wheat"));
        assert_eq!(lines.next(), Some("recipe_2,Haleem,2,\"Simmer, stirring often\""));
    }
}
