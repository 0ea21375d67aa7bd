// Adapters layer: concrete catalog sources (built-in, local file, remote document store).

pub mod builtin;
pub mod file;
pub mod http;

pub use builtin::BuiltinCatalog;
pub use file::FileCatalog;
pub use http::HttpCatalog;

use crate::config::toml_config::{AppConfig, SourceType};
use crate::core::{
    CatalogProvider, RecipeDetails, RecipeDetailsProvider, RecipeRequirement, Result,
    SubstituteItem, SubstituteProvider,
};
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;

/// 依設定選擇的目錄來源
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Builtin(BuiltinCatalog),
    File(FileCatalog),
    Http(HttpCatalog),
}

impl CatalogSource {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let source = &config.source;
        match source.r#type {
            SourceType::Builtin => Ok(CatalogSource::Builtin(BuiltinCatalog)),
            SourceType::File => {
                let path = validate_required_field("source.path", &source.path)?;
                Ok(CatalogSource::File(FileCatalog::new(path)?))
            }
            SourceType::Http => {
                let endpoint = validate_required_field("source.endpoint", &source.endpoint)?;
                Ok(CatalogSource::Http(HttpCatalog::with_options(
                    endpoint,
                    source.timeout_seconds,
                    &config.headers(),
                )?))
            }
        }
    }
}

#[async_trait]
impl CatalogProvider for CatalogSource {
    async fn fetch_all(&self) -> Result<Vec<RecipeRequirement>> {
        match self {
            CatalogSource::Builtin(c) => c.fetch_all().await,
            CatalogSource::File(c) => c.fetch_all().await,
            CatalogSource::Http(c) => c.fetch_all().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            CatalogSource::Builtin(c) => c.describe(),
            CatalogSource::File(c) => c.describe(),
            CatalogSource::Http(c) => c.describe(),
        }
    }
}

#[async_trait]
impl SubstituteProvider for CatalogSource {
    async fn fetch_substitutes(&self) -> Result<Vec<SubstituteItem>> {
        match self {
            // 內建目錄沒有替代食材資料
            CatalogSource::Builtin(_) => Ok(Vec::new()),
            CatalogSource::File(c) => c.fetch_substitutes().await,
            CatalogSource::Http(c) => c.fetch_substitutes().await,
        }
    }
}

#[async_trait]
impl RecipeDetailsProvider for CatalogSource {
    async fn find_by_id(&self, id: &str) -> Result<Option<RecipeDetails>> {
        match self {
            CatalogSource::Builtin(c) => c.find_by_id(id).await,
            CatalogSource::File(c) => c.find_by_id(id).await,
            CatalogSource::Http(c) => c.find_by_id(id).await,
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<RecipeDetails>> {
        match self {
            CatalogSource::Builtin(c) => c.find_by_name(name).await,
            CatalogSource::File(c) => c.find_by_name(name).await,
            CatalogSource::Http(c) => c.find_by_name(name).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_config() {
        let builtin = AppConfig::default();
        assert!(matches!(
            CatalogSource::from_config(&builtin).unwrap(),
            CatalogSource::Builtin(_)
        ));

        let file = AppConfig::from_toml_str("[source]\ntype = \"file\"\npath = \"c.json\"\n").unwrap();
        assert!(matches!(
            CatalogSource::from_config(&file).unwrap(),
            CatalogSource::File(_)
        ));

        let http = AppConfig::from_toml_str("[source]\ntype = \"http\"\n").unwrap();
        assert!(CatalogSource::from_config(&http).is_err());
    }

    #[tokio::test]
    async fn test_builtin_has_no_substitutes() {
        let source = CatalogSource::Builtin(BuiltinCatalog);
        assert!(source.fetch_substitutes().await.unwrap().is_empty());
    }
}
