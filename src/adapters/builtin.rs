use crate::core::{CatalogProvider, RecipeDetails, RecipeDetailsProvider, RecipeRequirement, Result};
use async_trait::async_trait;

/// 內建的兩道食譜，沒有設定目錄來源時使用
#[derive(Debug, Clone, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn entries() -> Vec<RecipeRequirement> {
        vec![
            RecipeRequirement::new(
                "recipe_1",
                "Grilled Chicken with Salad",
                "Lunch",
                "https://i.imgur.com/s5rzogv.jpeg",
                &["garlic", "lemon juice"],
            )
            .with_culture("American"),
            RecipeRequirement::new(
                "recipe_2",
                "Haleem",
                "Dinner",
                "https://i.imgur.com/wEBHkJT.jpeg",
                &["cracked wheat", "beef"],
            )
            .with_culture("Bangladeshi"),
        ]
    }
}

#[async_trait]
impl CatalogProvider for BuiltinCatalog {
    async fn fetch_all(&self) -> Result<Vec<RecipeRequirement>> {
        Ok(Self::entries())
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

// 內建目錄沒有作法步驟，食材清單即為需求清單
#[async_trait]
impl RecipeDetailsProvider for BuiltinCatalog {
    async fn find_by_id(&self, id: &str) -> Result<Option<RecipeDetails>> {
        Ok(Self::entries().iter().find(|r| r.id == id).map(RecipeDetails::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<RecipeDetails>> {
        Ok(Self::entries().iter().find(|r| r.name == name).map(RecipeDetails::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matcher::match_recipes;
    use crate::utils::validation::validate_catalog;

    #[tokio::test]
    async fn test_builtin_catalog_is_valid() {
        let entries = BuiltinCatalog.fetch_all().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert!(validate_catalog(&entries).is_ok());
    }

    #[test]
    fn test_builtin_scenario() {
        let results = match_recipes(&["garlic", "lemon juice"], &BuiltinCatalog::entries());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "recipe_1");
        assert_eq!(results[0].image_ref, "https://i.imgur.com/s5rzogv.jpeg");
    }

    #[tokio::test]
    async fn test_builtin_details() {
        let details = BuiltinCatalog.find_by_name("Haleem").await.unwrap().unwrap();
        assert_eq!(details.id, "recipe_2");
        assert_eq!(details.culture, "Bangladeshi");
        assert_eq!(details.ingredients, vec!["cracked wheat", "beef"]);
        assert!(details.instructions.is_empty());

        assert!(BuiltinCatalog.find_by_id("recipe_9").await.unwrap().is_none());
    }
}
