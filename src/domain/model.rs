use serde::{Deserialize, Serialize};

/// 食譜目錄中的一筆需求定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequirement {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub culture: String,
    #[serde(default, alias = "imageUrl", alias = "image_url")]
    pub image_ref: String,
    // 缺少食材清單時視為空清單（永遠符合）
    #[serde(default, alias = "requiredIngredients")]
    pub required_ingredients: Vec<String>,
}

impl RecipeRequirement {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        image_ref: impl Into<String>,
        required_ingredients: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            culture: String::new(),
            image_ref: image_ref.into(),
            required_ingredients: required_ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = culture.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image_ref: String,
}

impl From<&RecipeRequirement> for MatchResult {
    fn from(entry: &RecipeRequirement) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            category: entry.category.clone(),
            image_ref: entry.image_ref.clone(),
        }
    }
}

/// Everything shown on a recipe page: the display ingredient list and the
/// preparation steps, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetails {
    // 文件資料庫以文件 ID 定位，內容不一定帶 id
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub culture: String,
    #[serde(default, alias = "imageUrl", alias = "image_url")]
    pub image_ref: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl From<&RecipeRequirement> for RecipeDetails {
    fn from(entry: &RecipeRequirement) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            category: entry.category.clone(),
            culture: entry.culture.clone(),
            image_ref: entry.image_ref.clone(),
            ingredients: entry.required_ingredients.clone(),
            instructions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstituteItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default, alias = "imageUrl", alias = "image_url")]
    pub image_ref: String,
    #[serde(default, alias = "substitute")]
    pub substitutes: Vec<String>,
}

/// 目錄檔案的完整內容（TOML 或 JSON）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub recipes: Vec<RecipeRequirement>,
    #[serde(default)]
    pub substitutes: Vec<SubstituteItem>,
}

/// The same catalog file read for recipe pages; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailsDocument {
    #[serde(default)]
    pub recipes: Vec<RecipeDetails>,
}
