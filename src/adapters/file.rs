use crate::core::{
    CatalogDocument, CatalogProvider, DetailsDocument, RecipeDetails, RecipeDetailsProvider,
    RecipeRequirement, Result, SubstituteItem, SubstituteProvider,
};
use serde::de::DeserializeOwned;
use crate::utils::error::PantryError;
use crate::utils::validation::validate_file_extension;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// 從本機 TOML 或 JSON 檔案讀取目錄
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        validate_file_extension("catalog", &path.to_string_lossy(), &["toml", "json"])?;
        Ok(Self { path })
    }

    pub async fn load_document(&self) -> Result<CatalogDocument> {
        self.read_as().await
    }

    /// 以食譜頁面的欄位讀取同一個檔案
    pub async fn load_details(&self) -> Result<Vec<RecipeDetails>> {
        let doc: DetailsDocument = self.read_as().await?;
        Ok(doc.recipes)
    }

    async fn read_as<T: DeserializeOwned>(&self) -> Result<T> {
        tracing::debug!("Reading catalog file {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;

        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&content),
            _ => Self::parse_toml(&content),
        }
    }

    pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T> {
        toml::from_str(content).map_err(|e| PantryError::CatalogError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T> {
        Ok(serde_json::from_str(content)?)
    }
}

#[async_trait]
impl CatalogProvider for FileCatalog {
    async fn fetch_all(&self) -> Result<Vec<RecipeRequirement>> {
        Ok(self.load_document().await?.recipes)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[async_trait]
impl SubstituteProvider for FileCatalog {
    async fn fetch_substitutes(&self) -> Result<Vec<SubstituteItem>> {
        let items = self.load_document().await?.substitutes;
        tracing::debug!("Fetched {} substitutes", items.len());
        Ok(items)
    }
}

#[async_trait]
impl RecipeDetailsProvider for FileCatalog {
    async fn find_by_id(&self, id: &str) -> Result<Option<RecipeDetails>> {
        Ok(self.load_details().await?.into_iter().find(|r| r.id == id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<RecipeDetails>> {
        Ok(self.load_details().await?.into_iter().find(|r| r.name == name))
    }
}
