use crate::domain::model::{RecipeDetails, RecipeRequirement, SubstituteItem};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 食譜目錄來源（內建、檔案或遠端文件資料庫）
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<RecipeRequirement>>;

    /// 描述來源，用於日誌
    fn describe(&self) -> String;
}

#[async_trait]
pub trait SubstituteProvider: Send + Sync {
    async fn fetch_substitutes(&self) -> Result<Vec<SubstituteItem>>;
}

/// Recipe page lookups. `Ok(None)` means no such recipe.
#[async_trait]
pub trait RecipeDetailsProvider: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<RecipeDetails>>;

    /// 名稱需完全相符，多筆時取第一筆
    async fn find_by_name(&self, name: &str) -> Result<Option<RecipeDetails>>;
}

pub trait PantryStore: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn save(&self, items: &[String]) -> impl std::future::Future<Output = Result<()>> + Send;
}
